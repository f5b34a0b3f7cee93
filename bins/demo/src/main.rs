//! Importo demo renderer.
//!
//! Renders a sample amount through every display path of the library:
//! plain and locale-aware text, present/absent descriptions, styled spans
//! (drawn with ANSI weight and color codes), and the serialized form.
//!
//! Usage: cargo run --bin importo

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use importo_core::{describe_in, styled_in, Amount, FontWeight, StyledText, TextColor};

mod settings;

use settings::DisplaySettings;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "importo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = DisplaySettings::load().expect("Failed to load configuration");
    info!(
        currency = %settings.currency,
        locale = %settings.locale,
        "Display settings loaded"
    );

    let sample = Amount::from_int(12_000, settings.currency);
    let doubled = sample + sample;
    let absent: Option<Amount> = None;

    let styled = styled_in(
        Some(&sample),
        settings.locale,
        settings.integer_size,
        settings.fraction_size,
        TextColor::BLACK,
    );
    let uniform = styled_in(
        Some(&sample),
        settings.locale,
        settings.integer_size,
        settings.integer_size.saturating_sub(1),
        TextColor::BLACK,
    );
    let missing = styled_in(
        absent.as_ref(),
        settings.locale,
        settings.integer_size,
        settings.fraction_size,
        TextColor::BLACK,
    );

    println!("{:<18}{}", "default locale", sample);
    println!("{:<18}{}", "configured locale", sample.display_in(settings.locale));
    println!("{:<18}{}", "doubled", doubled.display_in(settings.locale));
    println!("{:<18}{}", "present", describe_in(Some(&sample), settings.locale));
    println!("{:<18}{}", "absent", describe_in(absent.as_ref(), settings.locale));
    println!("{:<18}{}", "styled", render_ansi(&styled));
    println!("{:<18}{}", "uniform", render_ansi(&uniform));
    println!("{:<18}{}", "styled absent", render_ansi(&missing));
    println!("{:<18}{}", "serialized", serde_json::to_string(&sample)?);
    println!("{:<18}{}", "spans", serde_json::to_string(&styled)?);

    Ok(())
}

/// Draws spans using ANSI weight and 24-bit color escapes.
fn render_ansi(text: &StyledText) -> String {
    let mut out = String::new();
    for span in &text.spans {
        match span.style {
            Some(style) => {
                let weight = match style.weight {
                    FontWeight::Bold => "1",
                    FontWeight::Thin => "2",
                    FontWeight::Regular => "22",
                };
                let TextColor { red, green, blue } = style.color;
                out.push_str(&format!(
                    "\x1b[{weight};38;2;{red};{green};{blue}m{}\x1b[0m",
                    span.text
                ));
            }
            None => out.push_str(&span.text),
        }
    }
    out
}
