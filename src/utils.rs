use url::Url;

/// Separator between the page name and the site name in titles
pub const TITLE_SEPARATOR: &str = " — ";

/// Keep only the part of a title before the first ` — `
pub fn short_title(title: &str) -> &str {
    title.split(TITLE_SEPARATOR).next().unwrap_or(title)
}

/// Resolve a `src`-style attribute the way a browser reports it: absolute when a base is known
pub fn resolve_url(base: Option<&Url>, raw: &str) -> String {
    match base {
        Some(base) => match base.join(raw) {
            Ok(resolved) => resolved.to_string(),
            Err(e) => {
                ::log::warn!("Could not resolve `{}` against {}: {}", raw, base, e);
                raw.to_string()
            }
        },
        None => raw.to_string(),
    }
}

/// Format `(1 - price / old_price) * 100` with two decimals and a trailing `%`
///
/// A zero or non-finite old price is not guarded: the ratio comes out as
/// `NaN` or infinite and is spelled `NaN%` / `Infinity%` / `-Infinity%`.
pub fn discount_percent(price: f64, old_price: f64) -> String {
    let percent = (1.0 - price / old_price) * 100.0;
    if percent.is_nan() {
        return "NaN%".to_string();
    }
    if percent.is_infinite() {
        return if percent > 0.0 {
            "Infinity%".to_string()
        } else {
            "-Infinity%".to_string()
        };
    }

    format!("{:.2}%", percent)
}
