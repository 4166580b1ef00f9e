use super::*;

pub(super) fn handle_login(args: LoginArgs, base_url: Option<String>) -> anyhow::Result<()> {
    let candidate = args.candidate.trim().to_string();
    if candidate.is_empty() {
        anyhow::bail!("admin token must not be empty");
    }
    // Validate against the backend before anything touches the keyring.
    let (client, _) = build_client(base_url, None)?;
    match client.validate_token(&candidate) {
        Ok(()) => {
            KeyringCredentials
                .set(&candidate)
                .context("store admin token")?;
            info!("admin token stored");
            println!("Admin token accepted and stored.");
            Ok(())
        }
        Err(ApiError::Unauthorized) => {
            // The rejected candidate must not linger in any slot.
            if let Err(err) = KeyringCredentials.clear() {
                warn!(error = %err, "failed to clear keyring after rejected login");
            }
            anyhow::bail!("invalid admin token")
        }
        Err(err) => anyhow::bail!(describe_api_error("Login failed", &err)),
    }
}

pub(super) fn handle_logout() -> anyhow::Result<()> {
    KeyringCredentials.clear().context("clear admin token")?;
    info!("admin token cleared");
    println!("Signed out.");
    Ok(())
}
