use super::*;

pub(super) fn handle_chat(
    args: ChatArgs,
    base_url: Option<String>,
    token: Option<String>,
) -> anyhow::Result<()> {
    let (client, config) = build_client(base_url, token)?;
    match args.command {
        ChatCommands::Send(args) => {
            let role = args.role.map(ChatRole::from).unwrap_or(config.role);
            let student_id = args.student_id.or(config.student_id);
            match client.chat(&args.message, role, student_id) {
                Ok(reply) => {
                    println!("Bot: {reply}");
                    Ok(())
                }
                Err(err) => anyhow::bail!(describe_api_error("Chat failed", &err)),
            }
        }
        ChatCommands::History(args) => {
            let exchanges = client
                .chat_history(args.student_id)
                .map_err(|err| anyhow::anyhow!(describe_api_error("History failed", &err)))?;
            if exchanges.is_empty() {
                println!("No stored exchanges for student {}.", args.student_id);
                return Ok(());
            }
            for exchange in exchanges.iter().rev() {
                if let Some(timestamp) = &exchange.timestamp {
                    println!("[{timestamp}]");
                }
                println!("You: {}", exchange.message);
                println!("Bot: {}", exchange.reply);
                println!();
            }
            Ok(())
        }
    }
}

pub(super) fn handle_health(
    base_url: Option<String>,
    token: Option<String>,
) -> anyhow::Result<()> {
    let (client, _) = build_client(base_url, token)?;
    match client.health() {
        Ok(message) => {
            println!("Backend OK: {message}");
            Ok(())
        }
        Err(err) => anyhow::bail!(describe_api_error("Health check failed", &err)),
    }
}
