use anyhow::{bail, Context, Result};
use recipe_nlg::{Generator, GeneratorConfig, Recipe};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Splits `<type> [frame-json] [| query-json]`.
///
/// The frame is read as one JSON value, so a `|` inside a string stays put.
fn parse_line(line: &str) -> Result<(String, Value, Option<Value>)> {
    let line = line.trim();
    let (kind, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim_start();

    let (frame, tail) = if rest.is_empty() || rest.starts_with('|') {
        (Value::Null, rest)
    } else {
        let mut values = serde_json::Deserializer::from_str(rest).into_iter::<Value>();
        let frame = match values.next() {
            Some(value) => value.context("frame is not valid JSON")?,
            None => Value::Null,
        };
        (frame, &rest[values.byte_offset()..])
    };

    let query_raw = match tail.trim().strip_prefix('|') {
        Some(q) => q.trim(),
        None if tail.trim().is_empty() => "",
        None => bail!("unexpected input after frame: {}", tail.trim()),
    };
    let query: Option<Value> = if query_raw.is_empty() {
        None
    } else {
        Some(serde_json::from_str(query_raw).context("query is not valid JSON")?)
    };

    Ok((kind.to_string(), frame, query))
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Setup Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    // 2. Setup Engine
    let config = GeneratorConfig::from_env();
    tracing::info!(
        "Generator ready (realizer: {}, seed: {:?})",
        config.realizer_url.as_deref().unwrap_or("built-in rules"),
        config.seed
    );
    let generator = Generator::from_config(config);

    // 3. Input Loop (Stdin)
    println!("Enter `<type> [frame-json] [| query-json]`, or `recipe <recipe-json>`.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let (kind, frame, query) = match parse_line(&line) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("error: {:#}", e);
                continue;
            }
        };

        if kind.eq_ignore_ascii_case("recipe") {
            match serde_json::from_value::<Recipe>(frame) {
                Ok(recipe) => println!("{}", generator.render_recipe(&recipe)),
                Err(e) => eprintln!("error: recipe is malformed: {}", e),
            }
            continue;
        }

        match generator.respond_from_json(&kind, &frame, query.as_ref()).await {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("error: {}", e),
        }
    }

    Ok(())
}
