use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pack::config::AppConfig;
use pack::models::{Channel, NewPost};
use pack::services::{attachment, feed, FeedClient, ReadTracker};
use pack::theme::Theme;

#[derive(Parser)]
#[command(name = "pack")]
#[command(about = "Terminal client for the pack social feed")]
struct Cli {
    /// Path to the config file (defaults to PACK_CONFIG or ./pack.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the posts in a channel and mark it read
    Feed {
        /// Channel to view: timeline, discussion, docs, neurotech, sources
        #[arg(short, long, default_value = "timeline")]
        channel: String,
    },
    /// List channels with unread markers
    Channels,
    /// Compose and submit a post
    Post {
        /// Post content (markdown is passed through verbatim)
        content: String,

        /// Channel to post into
        #[arg(short, long, default_value = "timeline")]
        channel: String,

        /// Image file to attach (dithered to the active theme's palette)
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Post id this post replies to
        #[arg(long)]
        reply_to: Option<String>,

        /// Theme override for the attachment palette
        #[arg(short, long)]
        theme: Option<String>,

        /// Display name override
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Dither an image file to a theme palette and write the JPEG payload
    Quantize {
        /// Source image file (any common raster format)
        #[arg(short, long)]
        input: PathBuf,

        /// Output JPEG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Theme whose palette to quantize against
        #[arg(short, long)]
        theme: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(AppConfig::default_path);
    let config = AppConfig::load(&config_path);

    match cli.command {
        Some(Commands::Feed { channel }) => run_feed(&config, &channel).await,
        Some(Commands::Channels) => run_channels(&config).await,
        Some(Commands::Post {
            content,
            channel,
            image,
            reply_to,
            theme,
            user,
        }) => run_post(&config, content, &channel, image, reply_to, theme, user).await,
        Some(Commands::Quantize {
            input,
            output,
            theme,
        }) => run_quantize(&config, &input, &output, theme),
        None => {
            run_status(&config, &config_path);
            Ok(())
        }
    }
}

/// Resolve the active theme: explicit override, then config, then default.
fn resolve_theme(config: &AppConfig, override_name: Option<&str>) -> anyhow::Result<Theme> {
    if let Some(name) = override_name {
        return Ok(name.parse()?);
    }
    if config.theme.is_empty() {
        return Ok(Theme::default());
    }
    match config.theme.parse() {
        Ok(theme) => Ok(theme),
        Err(e) => {
            tracing::warn!(%e, "Ignoring configured theme");
            Ok(Theme::default())
        }
    }
}

/// Show a channel's posts and mark the channel read.
async fn run_feed(config: &AppConfig, channel: &str) -> anyhow::Result<()> {
    let channel: Channel = channel.parse()?;
    let client = FeedClient::new(&config.api_url);
    let posts = client.fetch_posts().await?;

    println!("# {}", channel);
    println!("{}\n", channel.description());

    let now = chrono::Utc::now();
    let in_channel = feed::posts_for_channel(&posts, channel);
    if in_channel.is_empty() {
        println!("(no posts yet)");
    }
    for post in &in_channel {
        println!("{} · {}", post.user, post.format_age(now));
        if let Some(parent) = &post.parent_id {
            println!("  (reply to {parent})");
        }
        println!("{}", post.content);
        if post.image.is_some() {
            println!("[image attachment]");
        }
        if !post.readers.is_empty() {
            println!("read by: {}", post.readers.join(" "));
        }
        println!();
    }

    let mut tracker = ReadTracker::load(&config.state_file);
    if let Err(e) = tracker.mark_read(channel) {
        tracing::warn!(%e, "Failed to persist read state");
    }

    Ok(())
}

/// List all channels with unread markers.
async fn run_channels(config: &AppConfig) -> anyhow::Result<()> {
    let client = FeedClient::new(&config.api_url);
    let posts = client.fetch_posts().await?;
    let tracker = ReadTracker::load(&config.state_file);

    for channel in Channel::ALL {
        let count = feed::posts_for_channel(&posts, channel).len();
        let marker = if tracker.has_unread(channel, &posts) {
            "*"
        } else {
            " "
        };
        println!("{marker} {:<12} {count} posts", channel.as_str());
    }

    Ok(())
}

/// Compose and submit a post, with an optional dithered image attachment.
async fn run_post(
    config: &AppConfig,
    content: String,
    channel: &str,
    image: Option<PathBuf>,
    reply_to: Option<String>,
    theme_override: Option<String>,
    user_override: Option<String>,
) -> anyhow::Result<()> {
    let channel: Channel = channel.parse()?;
    let theme = resolve_theme(config, theme_override.as_deref())?;
    let user = user_override.unwrap_or_else(|| config.user.clone());

    if content.trim().is_empty() && image.is_none() {
        anyhow::bail!("nothing to post: content is empty and no image given");
    }

    let mut post = NewPost::new(content, user, channel);
    if let Some(id) = reply_to {
        post = post.with_parent(id);
    }

    // An attachment failure degrades to a text-only post rather than
    // aborting the submission.
    if let Some(path) = image {
        tracing::info!(path = %path.display(), theme = %theme, "Processing image attachment");
        match std::fs::read(&path) {
            Ok(bytes) => match attachment::process(bytes, theme.palette()).await {
                Ok(data_uri) => post = post.with_image(data_uri),
                Err(e) => tracing::warn!(%e, "Couldn't process that image, posting without it"),
            },
            Err(e) => tracing::warn!(%e, "Couldn't read image file, posting without it"),
        }
    }

    let client = FeedClient::new(&config.api_url);
    let stored = client.create_post(&post).await?;
    println!(
        "posted to {} as {} (id {})",
        channel, stored.user, stored.id
    );

    Ok(())
}

/// Run the attachment pipeline on a local file, writing raw JPEG bytes.
fn run_quantize(
    config: &AppConfig,
    input: &PathBuf,
    output: &PathBuf,
    theme_override: Option<String>,
) -> anyhow::Result<()> {
    use duotone_dither::Quantizer;

    let theme = resolve_theme(config, theme_override.as_deref())?;
    let bytes = std::fs::read(input)?;

    let raster = attachment::decode(&bytes)?;
    let quantized = Quantizer::new(theme.palette()).quantize(&raster);
    let jpeg = attachment::encode_jpeg(&quantized)?;

    std::fs::write(output, &jpeg)?;
    println!(
        "quantized {} -> {} ({}x{}, {} bytes, theme {})",
        input.display(),
        output.display(),
        quantized.width(),
        quantized.height(),
        jpeg.len(),
        theme
    );

    Ok(())
}

/// Print a status summary when invoked without a subcommand.
fn run_status(config: &AppConfig, config_path: &std::path::Path) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Pack v{VERSION} - terminal client for the pack social feed\n");

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", config_path.display())
    };
    println!("Config:  {source}");
    println!("API:     {}", config.api_url);
    println!("User:    {}", config.user);
    println!(
        "Theme:   {}",
        if config.theme.is_empty() {
            Theme::default().as_str()
        } else {
            &config.theme
        }
    );

    println!("\nCommands:");
    println!("  pack feed      Show a channel's posts");
    println!("  pack channels  List channels with unread markers");
    println!("  pack post      Compose and submit a post");
    println!("  pack quantize  Dither an image file to a theme palette");
    println!("\nRun 'pack --help' for more details.");
}
