//! Category CLI commands

use clap::Subcommand;

use crate::backend::SessionId;
use crate::display::format_category_list;
use crate::error::ExpensioResult;
use crate::services::SessionCache;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List your categories followed by the defaults
    List,

    /// Create a custom category
    Add {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> ExpensioResult<()> {
    match cmd {
        CategoryCommands::List => {
            let cache = SessionCache::new(storage);
            let categories = cache.categories(&SessionId::default())?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add { name } => {
            let category = storage.add_user_category(&name)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }
    }

    Ok(())
}
