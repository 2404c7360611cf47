//! Interactive menu loop.
//!
//! Reads choices from any `BufRead` and writes to any `Write`, so a whole
//! session can be scripted in tests.

use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::application::report::{format_peak, render_tree, TraversalReport};
use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{max_path_sum, BinaryTree, TreeBuilder};
use crate::infrastructure::{read_lossy_line, LinePrompt};

pub const NO_TREE: &str = "No tree created yet!";
pub const INVALID_CHOICE: &str = "Invalid choice!";
pub const GOODBYE: &str = "Goodbye!";

const MENU: &str = "\n1. Create tree (level-wise)\n\
                    2. Display tree structure\n\
                    3. Show traversals\n\
                    4. Max path sum\n\
                    5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Build,
    Display,
    Traversals,
    PathSum,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Build),
            "2" => Some(Self::Display),
            "3" => Some(Self::Traversals),
            "4" => Some(Self::PathSum),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
    settings: Settings,
    tree: BinaryTree,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
            tree: BinaryTree::new(),
        }
    }

    pub fn tree(&self) -> &BinaryTree {
        &self.tree
    }

    /// Run until the exit choice or end of input.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&mut self) -> ApplicationResult<()> {
        self.say("=== Binary Tree Builder ===")?;
        loop {
            self.say(MENU)?;
            write!(self.output, "Choose (1-5): ").io_context("write menu prompt")?;
            self.output.flush().io_context("flush menu prompt")?;

            let read = read_lossy_line(&mut self.input).io_context("read menu choice")?;
            let Some(line) = read else {
                debug!("menu input closed");
                self.say("")?;
                return self.say(GOODBYE);
            };

            let choice = MenuChoice::parse(&line);
            debug!(?choice, "menu");
            match choice {
                Some(MenuChoice::Build) => self.build()?,
                Some(MenuChoice::Display) => self.display()?,
                Some(MenuChoice::Traversals) => self.traversals()?,
                Some(MenuChoice::PathSum) => self.path_sum()?,
                Some(MenuChoice::Exit) => return self.say(GOODBYE),
                None => self.say(INVALID_CHOICE)?,
            }
        }
    }

    /// Replaces the current tree, even when the new one is empty.
    fn build(&mut self) -> ApplicationResult<()> {
        let builder = TreeBuilder::new(self.settings.grammar());
        let mut prompt = LinePrompt::new(
            &mut self.input,
            &mut self.output,
            self.settings.null_token.as_str(),
            self.settings.quit_token.as_str(),
        );
        self.tree = builder.build(&mut prompt)?;
        Ok(())
    }

    fn display(&mut self) -> ApplicationResult<()> {
        if self.tree.is_empty() {
            return self.say(NO_TREE);
        }
        let rendered = render_tree(&self.tree, self.settings.display);
        self.say(&rendered)
    }

    fn traversals(&mut self) -> ApplicationResult<()> {
        if self.tree.is_empty() {
            return self.say(NO_TREE);
        }
        let report = TraversalReport::from_tree(&self.tree);
        self.say("\n=== Tree Traversals ===")?;
        self.say(&report.to_string())
    }

    fn path_sum(&mut self) -> ApplicationResult<()> {
        if self.tree.is_empty() {
            return self.say(NO_TREE);
        }
        let peak = max_path_sum(&self.tree)?;
        self.say("\n=== Max Path Sum ===")?;
        self.say(&format_peak(&peak))
    }

    fn say(&mut self, text: &str) -> ApplicationResult<()> {
        writeln!(self.output, "{text}").io_context("write output")
    }
}
