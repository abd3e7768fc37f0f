use std::io::Write;

use anyhow::{bail, Context, Result};

use spotsession_core::{
    ClientConfig, CookieClientFactory, SessionError, SessionStore, TracingLogger,
};

/// Characters of a cookie shown before masking
const VISIBLE_PREFIX: usize = 6;

pub fn setup<W: Write>(
    store: &SessionStore<CookieClientFactory>,
    identifier: &str,
    sp_dc: &str,
    sp_key: &str,
    out: &mut W,
) -> Result<()> {
    // The file is written before the client is built, so a client failure
    // still leaves the session on disk.
    match store.save(Some(identifier), sp_dc, sp_key) {
        Ok(_) => {}
        Err(e @ SessionError::Client(_)) => {
            return Err(anyhow::Error::new(e).context(format!(
                "Session '{}' was saved to {} but no client could be built from it",
                identifier,
                store.path().display()
            )))
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to save session '{}'", identifier)))
        }
    }
    writeln!(out, "Session '{}' saved to: {}", identifier, store.path().display())?;
    Ok(())
}

pub fn load<W: Write>(
    store: &SessionStore<CookieClientFactory>,
    identifier: &str,
    out: &mut W,
) -> Result<()> {
    let config = ClientConfig::default().with_logger(TracingLogger);
    let client = store.load_with(Some(identifier), &config)?;

    writeln!(out, "identifier: {}", client.identifier())?;
    writeln!(out, "sp_dc:      {}", mask_secret(&client.cookies().sp_dc))?;
    writeln!(out, "sp_key:     {}", mask_secret(&client.cookies().sp_key))?;
    Ok(())
}

pub fn list<W: Write>(store: &SessionStore<CookieClientFactory>, out: &mut W) -> Result<()> {
    let identifiers = store.list()?;
    if identifiers.is_empty() {
        eprintln!(
            "No saved sessions in {}. Run `spotsession setup` to add one.",
            store.path().display()
        );
    }
    for identifier in identifiers {
        writeln!(out, "{}", identifier)?;
    }
    Ok(())
}

pub fn remove<W: Write>(
    store: &SessionStore<CookieClientFactory>,
    identifier: &str,
    out: &mut W,
) -> Result<()> {
    store.remove(identifier)?;
    writeln!(out, "Session '{}' removed from {}.", identifier, store.path().display())?;
    Ok(())
}

/// Use the value given on the command line, or ask for it without echo.
pub fn cookie_or_prompt(value: Option<String>, name: &str) -> Result<String> {
    let value = match value {
        Some(value) => value,
        None => rpassword::prompt_password(format!("{}: ", name))
            .with_context(|| format!("Failed to read {}", name))?,
    };
    if value.trim().is_empty() {
        bail!("{} must not be empty", name);
    }
    Ok(value)
}

/// Show only the start of a secret
fn mask_secret(secret: &str) -> String {
    let total = secret.chars().count();
    if total <= VISIBLE_PREFIX {
        return "*".repeat(total);
    }
    let prefix: String = secret.chars().take(VISIBLE_PREFIX).collect();
    format!("{}... ({} chars)", prefix, total)
}
