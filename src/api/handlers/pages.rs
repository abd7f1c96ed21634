// src/api/handlers/pages.rs
//
// Server-rendered HTML form. The page is a single Pico.css template with
// placeholders filled in per request; no templating engine is involved.

use actix_web::{web, HttpResponse, Responder};

use crate::api::handlers::generator::FETCH_FAILED_MSG;
use crate::api::types::GenerateForm;
use crate::core::config::Config;
use crate::generators;
use crate::models::{PassphraseOptions, StrengthRating, MIN_LENGTH_CEIL, MIN_LENGTH_FLOOR};
use crate::words::WordClient;

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Passphrase Generator</title>
    <link rel="stylesheet" href="https://unpkg.com/@picocss/pico@1.*/css/pico.min.css">
  </head>
  <body>
    <main class="container">
      <h1>Passphrase Generator</h1>
      <form method="post">
        <label for="min_length">Minimum Length:</label>
        <input type="number" id="min_length" name="min_length" value="{min_length}" min="8" max="128">
        <br><br>
        <label for="add_number">Add Random Number:</label>
        <input type="checkbox" role="switch" id="add_number" name="add_number" {number_checked}>
        <br><br>
        <label for="add_special">Add Special Character:</label>
        <input type="checkbox" role="switch" id="add_special" name="add_special" {special_checked}>
        <br><br>
        <button type="submit">Generate Passphrase</button>
      </form>
      <article>
{result}
      </article>
    </main>
  </body>
</html>
"#;

struct PageState<'a> {
    min_length: usize,
    add_number: bool,
    add_special: bool,
    passphrase: Option<&'a str>,
    strength: Option<StrengthRating>,
    error: Option<&'a str>,
}

// Escape values substituted into the page. The words come from an external
// provider, so they are treated as untrusted markup.
fn html_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_page(state: &PageState<'_>) -> String {
    let mut result = String::new();

    if let Some(passphrase) = state.passphrase {
        result.push_str(&format!(
            "        <p><strong>{}</strong></p>\n",
            html_escape(passphrase)
        ));
        if let Some(strength) = state.strength {
            result.push_str(&format!("        <p>Strength: {}</p>\n", strength));
        }
    }

    if let Some(error) = state.error {
        result.push_str("        <h2>Error:</h2>\n");
        result.push_str(&format!(
            "        <p><strong>{}</strong></p>\n",
            html_escape(error)
        ));
    }

    PAGE_TEMPLATE
        .replace("{min_length}", &state.min_length.to_string())
        .replace("{number_checked}", if state.add_number { "checked" } else { "" })
        .replace("{special_checked}", if state.add_special { "checked" } else { "" })
        .replace("{result}", &result)
}

/// GET /: render the empty form with configured defaults.
pub async fn index(config: web::Data<Config>) -> impl Responder {
    let page = render_page(&PageState {
        min_length: config.default_min_length,
        add_number: true,
        add_special: false,
        passphrase: None,
        strength: None,
        error: None,
    });

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

/// POST /: generate a passphrase from the form values and re-render.
pub async fn generate(
    client: web::Data<WordClient>,
    config: web::Data<Config>,
    form: web::Form<GenerateForm>,
) -> impl Responder {
    let min_length = form
        .min_length
        .unwrap_or(config.default_min_length)
        .clamp(MIN_LENGTH_FLOOR, MIN_LENGTH_CEIL);

    let options = PassphraseOptions {
        min_length,
        add_number: form.add_number(),
        add_special: form.add_special(),
    };

    let words = client.fetch_words(options.min_length).await;

    let (passphrase, strength, error) = match generators::generate_passphrase(&words, &options)
    {
        Ok(passphrase) => {
            let strength = generators::rate_strength(&passphrase);
            (Some(passphrase), Some(strength), None)
        }
        Err(e) => {
            log::warn!("Passphrase generation failed: {}", e);
            (None, None, Some(FETCH_FAILED_MSG))
        }
    };

    let page = render_page(&PageState {
        min_length: options.min_length,
        add_number: options.add_number,
        add_special: options.add_special,
        passphrase: passphrase.as_deref(),
        strength,
        error,
    });

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_shows_passphrase_and_strength() {
        let page = render_page(&PageState {
            min_length: 16,
            add_number: true,
            add_special: false,
            passphrase: Some("Grub-Craftsman-42"),
            strength: Some(StrengthRating::Medium),
            error: None,
        });

        assert!(page.contains("Grub-Craftsman-42"));
        assert!(page.contains("Strength: Medium"));
        assert!(!page.contains("Error:"));
        assert!(page.contains(r#"value="16""#));
    }

    #[test]
    fn page_shows_error_without_passphrase() {
        let page = render_page(&PageState {
            min_length: 16,
            add_number: false,
            add_special: false,
            passphrase: None,
            strength: None,
            error: Some(FETCH_FAILED_MSG),
        });

        assert!(page.contains("Error:"));
        assert!(page.contains(FETCH_FAILED_MSG));
        assert!(!page.contains("Strength:"));
    }

    #[test]
    fn provider_markup_is_escaped() {
        let page = render_page(&PageState {
            min_length: 16,
            add_number: false,
            add_special: false,
            passphrase: Some("<script>alert(1)</script>-Craftsman"),
            strength: Some(StrengthRating::Weak),
            error: None,
        });

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;-Craftsman"));
    }

    #[test]
    fn escape_covers_html_metacharacters() {
        assert_eq!(html_escape(r#"a&b<c>d"e"#), "a&amp;b&lt;c&gt;d&quot;e");
        assert_eq!(html_escape("Grub-Craftsman"), "Grub-Craftsman");
    }

    #[test]
    fn checkbox_state_round_trips() {
        let page = render_page(&PageState {
            min_length: 24,
            add_number: true,
            add_special: true,
            passphrase: None,
            strength: None,
            error: None,
        });

        assert!(page.contains(r#"name="add_number" checked"#));
        assert!(page.contains(r#"name="add_special" checked"#));
    }
}
