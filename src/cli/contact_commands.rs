use std::io::{BufRead, Write};

use crate::cli::console::Severity;
use crate::cli::context::CLIContext;
use crate::cli::Step;
use crate::error::{ContactError, ContactResult};
use crate::model::Field;
use crate::ops::contact_ops;
use crate::queries::contact_queries;

/// Prompt for name, phone and email, each until valid, then add.
pub fn add<R: BufRead, W: Write>(ctx: &mut CLIContext<R, W>) -> ContactResult<Step> {
    let Some(name) = prompt_until_valid(ctx, Field::Name)? else {
        return Ok(Step::Quit);
    };
    let Some(phone) = prompt_until_valid(ctx, Field::Phone)? else {
        return Ok(Step::Quit);
    };
    let Some(email) = prompt_until_valid(ctx, Field::Email)? else {
        return Ok(Step::Quit);
    };

    match contact_ops::add_contact(&mut ctx.store, &name, &phone, &email) {
        Ok(contact) => ctx.console.say(
            Severity::Success,
            &format!("\nContact '{}' added successfully!", contact.name),
        )?,
        Err(e) => ctx.print_error(&e)?,
    }
    Ok(Step::Continue)
}

/// Re-prompt for one field until it passes its format and uniqueness
/// checks. None means input ended.
fn prompt_until_valid<R: BufRead, W: Write>(
    ctx: &mut CLIContext<R, W>,
    field: Field,
) -> ContactResult<Option<String>> {
    loop {
        let Some(raw) = ctx.console.read_line(field.prompt())? else {
            return Ok(None);
        };
        match contact_ops::check_field(&ctx.store, field, &raw) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => ctx.print_error(&e)?,
        }
    }
}

pub fn view<R: BufRead, W: Write>(ctx: &mut CLIContext<R, W>) -> ContactResult<Step> {
    if ctx.store.is_empty() {
        ctx.console.say(Severity::Warning, "No contacts found.")?;
        return Ok(Step::Continue);
    }

    ctx.console
        .line(&format!("\n{:<20} {:<15} {}", "Name", "Phone", "Email"))?;
    ctx.console.line(&"-".repeat(50))?;
    for contact in contact_queries::all_contacts(&ctx.store) {
        ctx.console.line(&contact.to_string())?;
    }
    Ok(Step::Continue)
}

pub fn search<R: BufRead, W: Write>(ctx: &mut CLIContext<R, W>) -> ContactResult<Step> {
    let Some(query) = ctx.console.read_line("\nEnter Name to search: ")? else {
        return Ok(Step::Quit);
    };

    let matches = contact_queries::search_by_name(&ctx.store, &query);
    if matches.is_empty() {
        ctx.console
            .say(Severity::Warning, "No contacts found with that name.")?;
        return Ok(Step::Continue);
    }

    ctx.console.line("\n--- Search Results ---")?;
    for contact in matches {
        ctx.console.line(&contact.to_string())?;
    }
    Ok(Step::Continue)
}

pub fn delete<R: BufRead, W: Write>(ctx: &mut CLIContext<R, W>) -> ContactResult<Step> {
    let Some(name) = ctx.console.read_line("\nEnter Name to delete: ")? else {
        return Ok(Step::Quit);
    };

    match contact_ops::delete_contact(&mut ctx.store, &name) {
        Ok(contact) => ctx.console.say(
            Severity::Success,
            &format!("\nContact '{}' deleted successfully!", contact.name),
        )?,
        Err(e @ ContactError::NotFound { .. }) => ctx.console.say(Severity::Warning, &e.to_string())?,
        Err(e) => return Err(e),
    }
    Ok(Step::Continue)
}
