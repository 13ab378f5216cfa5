//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use stockkeep_core::Entity;
use stockkeep_inventory::InventoryManager;

use crate::prompt::Prompter;
use crate::render::{format_currency, render_listing};

const TITLE_WIDTH: usize = 31;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Update,
    List,
    Total,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::Update,
        MenuChoice::List,
        MenuChoice::Total,
        MenuChoice::Exit,
    ];

    pub fn from_number(n: u32) -> Option<Self> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Product",
            MenuChoice::Remove => "Remove Product",
            MenuChoice::Update => "Update Product",
            MenuChoice::List => "Product List",
            MenuChoice::Total => "Get Total Inventory Value",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Drives an [`InventoryManager`] from line-oriented input.
///
/// The manager is borrowed, so the caller keeps it after the session ends.
pub struct Session<'m, R, W> {
    manager: &'m mut InventoryManager,
    prompter: Prompter<R, W>,
    currency: String,
}

impl<'m, R: BufRead, W: Write> Session<'m, R, W> {
    pub fn new(manager: &'m mut InventoryManager, prompter: Prompter<R, W>, currency: impl Into<String>) -> Self {
        Self {
            manager,
            prompter,
            currency: currency.into(),
        }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!("session started");
        loop {
            self.show_menu()?;
            let Some(line) = self.prompter.read_line()? else {
                info!("input closed, ending session");
                return Ok(());
            };

            let Ok(number) = line.parse::<u32>() else {
                self.prompter.say("❌ Invalid option")?;
                continue;
            };
            let Some(choice) = MenuChoice::from_number(number) else {
                self.prompter.say("❌ Invalid option. Please choose again.")?;
                continue;
            };

            debug!(?choice, "menu choice");
            match choice {
                MenuChoice::Add => self.add()?,
                MenuChoice::Remove => self.remove()?,
                MenuChoice::Update => self.update()?,
                MenuChoice::List => self.list()?,
                MenuChoice::Total => self.total()?,
                MenuChoice::Exit => {
                    self.prompter.say("Exiting...")?;
                    info!("session ended");
                    return Ok(());
                }
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(TITLE_WIDTH);
        self.prompter.say(&rule)?;
        self.prompter.say("🏪 Inventory Management System")?;
        self.prompter.say(&rule)?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            self.prompter.say(&format!("{}. {}", i + 1, choice.label()))?;
        }
        self.prompter.show("Choose an option: ")
    }

    fn add(&mut self) -> io::Result<()> {
        self.prompter.cancel_banner()?;
        let Some(name) = self.prompter.ask_name("Enter Product Name: ")? else {
            return Ok(());
        };
        let Some(quantity) = self.prompter.ask_count("Enter Quantity: ")? else {
            return Ok(());
        };
        let Some(price) = self.prompter.ask_amount("Enter Price: ")? else {
            return Ok(());
        };

        match self.manager.add(name, quantity, price) {
            Ok(product) => {
                let message = format!(
                    "✅ Product '{}' added successfully with ID: {}.",
                    product.name(),
                    product.id()
                );
                self.prompter.say(&message)
            }
            Err(e) => self.prompter.say(&format!("❌ {e}")),
        }
    }

    fn remove(&mut self) -> io::Result<()> {
        self.prompter.cancel_banner()?;
        let Some(id) = self.prompter.ask_product_id("Enter the Product ID: ")? else {
            return Ok(());
        };

        match self.manager.remove(id) {
            Ok(product) => self.prompter.say(&format!("✅ {} removed.", product.name())),
            Err(e) if e.is_not_found() => self.prompter.say(&format!("❌ Product with {id} not found.")),
            Err(e) => self.prompter.say(&format!("❌ {e}")),
        }
    }

    fn update(&mut self) -> io::Result<()> {
        self.prompter.cancel_banner()?;
        let Some(id) = self.prompter.ask_product_id("Enter the Product ID: ")? else {
            return Ok(());
        };
        let Some(quantity) = self.prompter.ask_count("Enter the new quantity: ")? else {
            return Ok(());
        };

        match self.manager.update(id, quantity) {
            Ok(product) => {
                let message = format!("✅ Updated {}, quantity: {}.", product.name(), product.quantity());
                self.prompter.say(&message)
            }
            Err(e) if e.is_not_found() => self.prompter.say(&format!("❌ Product with {id} not found.")),
            Err(e) => self.prompter.say(&format!("❌ {e}")),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        let rendered = render_listing(self.manager.list(), &self.currency);
        self.prompter.show(&rendered)
    }

    fn total(&mut self) -> io::Result<()> {
        let total = self.manager.total_value();
        if total.is_empty() {
            self.prompter.say("❌ Inventory is empty")?;
        }
        let message = format!(
            "✅ Total Inventory Value: {}",
            format_currency(&self.currency, total.amount())
        );
        self.prompter.say(&message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_in_order() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::from_number(5), Some(MenuChoice::Total));
        assert_eq!(MenuChoice::from_number(6), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(7), None);
    }
}
