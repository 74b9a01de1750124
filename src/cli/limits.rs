//! Budget limit CLI commands

use clap::Subcommand;

use crate::display::format_limits;
use crate::error::{ExpensioError, ExpensioResult};
use crate::models::{BudgetLimits, LimitType, Money};
use crate::storage::Storage;

/// Limit subcommands
#[derive(Subcommand, Debug)]
pub enum LimitCommands {
    /// Show the configured limits
    Show,

    /// Set one or more limits; 0 clears a limit
    Set {
        /// Daily limit
        #[arg(long)]
        daily: Option<String>,
        /// Weekly limit (trailing seven days)
        #[arg(long)]
        weekly: Option<String>,
        /// Monthly limit (calendar month)
        #[arg(long)]
        monthly: Option<String>,
        /// Currency code shown next to amounts (e.g., "USD")
        #[arg(long)]
        currency: Option<String>,
    },

    /// Remove every limit
    Clear,
}

fn parse_limit(limit_type: LimitType, value: &str) -> ExpensioResult<Option<Money>> {
    let amount = Money::parse(value).map_err(|e| {
        ExpensioError::Validation(format!("Invalid {} limit: {}", limit_type, e))
    })?;

    if amount.is_negative() {
        return Err(ExpensioError::Validation(format!(
            "The {} limit cannot be negative",
            limit_type
        )));
    }

    Ok(Some(amount).filter(|a| !a.is_zero()))
}

/// Handle a limits command
pub fn handle_limits_command(storage: &Storage, cmd: LimitCommands) -> ExpensioResult<()> {
    match cmd {
        LimitCommands::Show => {
            print!("{}", format_limits(&storage.limits.get()?));
        }

        LimitCommands::Set {
            daily,
            weekly,
            monthly,
            currency,
        } => {
            if daily.is_none() && weekly.is_none() && monthly.is_none() && currency.is_none() {
                println!("No changes specified.");
                return Ok(());
            }

            let mut limits = storage.limits.get()?;
            for (limit_type, value) in [
                (LimitType::Daily, daily),
                (LimitType::Weekly, weekly),
                (LimitType::Monthly, monthly),
            ] {
                if let Some(value) = value {
                    limits.set_limit(limit_type, parse_limit(limit_type, &value)?);
                }
            }
            if let Some(currency) = currency {
                let code = currency.trim().to_uppercase();
                limits.currency = if code.is_empty() { None } else { Some(code) };
            }

            let limits = storage.update_limits(limits)?;
            println!("Budget limits updated.");
            println!();
            print!("{}", format_limits(&limits));
        }

        LimitCommands::Clear => {
            storage.update_limits(BudgetLimits::default())?;
            println!("All budget limits cleared.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit() {
        assert_eq!(
            parse_limit(LimitType::Daily, "100").unwrap(),
            Some(Money::from_units(100, 0))
        );
        assert_eq!(parse_limit(LimitType::Daily, "0").unwrap(), None);
        assert!(parse_limit(LimitType::Weekly, "-5").is_err());
        assert!(parse_limit(LimitType::Monthly, "lots").is_err());
    }
}
