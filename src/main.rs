use art_discovery::core::discovery::{DiscoveryEngine, DiscoveryOutcome};
use art_discovery::core::session::GallerySession;
use art_discovery::utils::{color, logger};
use art_discovery::{CliConfig, HarvardImageClient};
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting art-discovery CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證並解析配置（CLI > 配置檔 > 環境變數）
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let max_attempts = config.max_attempts;
    let source = HarvardImageClient::new(config);
    let engine = DiscoveryEngine::new(source, max_attempts);
    let mut session = GallerySession::new();

    println!("🏛  Virtual Museum — discover artwork from Harvard's collection");
    println!("Type 'help' for commands.");

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let arg = parts.next();

        match (command, arg) {
            ("discover", _) => {
                println!("Discovering…");
                match session.discover_next(&engine).await {
                    Ok(DiscoveryOutcome::Found(_)) => print_current(&session),
                    Ok(DiscoveryOutcome::Exhausted { attempts }) => {
                        println!(
                            "😔 No new artwork found after {} batches. \
                             Try unbanning some colors.",
                            attempts
                        );
                    }
                    Err(e) => {
                        tracing::error!("discovery failed: {}", e);
                        eprintln!("❌ {}", e.user_friendly_message());
                        eprintln!("💡 {}", e.recovery_suggestion());
                    }
                }
            }
            ("ban", Some(hex)) => {
                if session.ban_color(hex) {
                    println!("Banned {}", hex);
                } else {
                    println!("{} is already banned", hex);
                }
            }
            ("unban", Some(hex)) => {
                if session.unban_color(hex) {
                    println!("Unbanned {}", hex);
                } else {
                    println!("{} was not banned", hex);
                }
            }
            ("bans", _) => print_bans(&session),
            ("gallery", _) => print_gallery(&session),
            ("help", _) => print_help(),
            ("quit", _) | ("exit", _) => break,
            ("", _) => {}
            _ => println!("Unknown command '{}'. Type 'help'.", command),
        }
    }

    println!(
        "👋 Session over — {} artwork(s) discovered.",
        session.history().len()
    );
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  discover       fetch and display a new random artwork");
    println!("  ban <hex>      ban a color (e.g. ban #967850)");
    println!("  unban <hex>    remove a color from the ban list");
    println!("  bans           show the ban list");
    println!("  gallery        show all artwork discovered this session");
    println!("  quit           exit");
}

fn print_current(session: &GallerySession) {
    let Some(artwork) = session.current() else {
        println!("You haven't discovered any artwork yet!");
        return;
    };

    println!("🖼  Artwork #{}", artwork.id);
    println!("   {}", artwork.image_url);
    println!(
        "   {}",
        artwork.description.as_deref().unwrap_or("No description available")
    );
    if artwork.colors.is_empty() {
        println!("   (no color data)");
    }
    for entry in &artwork.colors {
        // Suggested text color over the swatch, as the web UI would render it.
        println!(
            "   {}  (text: {})  — ban with: ban {}",
            entry.color,
            color::contrast_color(&entry.color),
            entry.color
        );
    }
}

fn print_bans(session: &GallerySession) {
    let banned = session.banned_colors();
    if banned.is_empty() {
        println!("No colors banned.");
        return;
    }
    println!("Colors banned:");
    for hex in banned.iter() {
        println!("  {}  (text: {})", hex, color::contrast_color(hex));
    }
}

fn print_gallery(session: &GallerySession) {
    let history = session.history();
    if history.is_empty() {
        println!("You haven't discovered any artwork yet!");
        return;
    }
    println!("Artwork seen so far ({}):", history.len());
    for discovered in history {
        println!(
            "  [{}] #{} {} — {}",
            discovered.discovered_at.format("%H:%M:%S"),
            discovered.record.id,
            discovered.record.image_url,
            discovered
                .record
                .description
                .as_deref()
                .unwrap_or("No description available")
        );
    }
}
