//! Banks command - list supported banks and check account lengths.

use clap::{Args, Subcommand};
use console::style;

use paydoc_core::extract::rules::{
    account_length_warning, allowed_account_lengths, digits_only, extract_bank_name,
    CANONICAL_BANKS,
};

/// Arguments for the banks command.
#[derive(Args)]
pub struct BanksArgs {
    #[command(subcommand)]
    command: BanksCommand,
}

#[derive(Subcommand)]
enum BanksCommand {
    /// List bank choices and their account lengths
    List,

    /// Check an account number's length against a bank's rule
    Check {
        /// Bank name or alias (e.g. "KB", "신한은행")
        bank: String,
        /// Account number, hyphens allowed
        account: String,
    },
}

pub async fn run(args: BanksArgs) -> anyhow::Result<()> {
    match args.command {
        BanksCommand::List => list_banks(),
        BanksCommand::Check { bank, account } => check_account(&bank, &account),
    }
}

fn format_lengths(bank: &str) -> String {
    match allowed_account_lengths(bank) {
        Some(lengths) => lengths
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("/"),
        None => "-".to_string(),
    }
}

fn list_banks() -> anyhow::Result<()> {
    println!("{:<12} {}", style("Bank").bold(), style("Account digits").bold());

    for bank in CANONICAL_BANKS {
        println!("{:<12} {}", bank, format_lengths(bank));
    }

    Ok(())
}

fn check_account(bank: &str, account: &str) -> anyhow::Result<()> {
    let bank = extract_bank_name(bank).unwrap_or_else(|| bank.to_string());
    let digits = digits_only(account);

    if digits.is_empty() {
        anyhow::bail!("Account number contains no digits: {}", account);
    }

    if allowed_account_lengths(&bank).is_none() {
        println!(
            "{} No account length rule for {}",
            style("ℹ").blue(),
            bank
        );
        return Ok(());
    }

    if let Some(warning) = account_length_warning(&bank, &digits) {
        anyhow::bail!(warning);
    }

    println!(
        "{} {} account number length OK ({} digits)",
        style("✓").green(),
        bank,
        digits.len()
    );

    Ok(())
}
