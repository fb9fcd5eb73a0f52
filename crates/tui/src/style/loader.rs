use anyhow::{Context, Result, bail};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use super::theme::{Theme, ThemeRegistration};

#[derive(Debug, Deserialize)]
struct ThemeDocument {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	preview: StyleSpec,
	muted: StyleSpec,
	search: StyleSpec,
	search_focused: StyleSpec,
	button: StyleSpec,
	button_focused: StyleSpec,
	option: StyleSpec,
	highlight: StyleSpec,
	active: StyleSpec,
}

impl ThemeStyles {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let style = |spec: &StyleSpec, key: &str| spec.to_style(&format!("{context}.{key}"));
		Ok(Theme {
			preview: style(&self.preview, "preview")?,
			muted: style(&self.muted, "muted")?,
			search: style(&self.search, "search")?,
			search_focused: style(&self.search_focused, "search_focused")?,
			button: style(&self.button, "button")?,
			button_focused: style(&self.button_focused, "button_focused")?,
			option: style(&self.option, "option")?,
			highlight: style(&self.highlight, "highlight")?,
			active: style(&self.active, "active")?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
struct StyleSpec {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).with_context(|| format!("{context}: bad foreground `{fg}`"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).with_context(|| format!("{context}: bad background `{bg}`"))?);
		}
		for name in &self.modifiers {
			style = style
				.add_modifier(parse_modifier(name).with_context(|| format!("{context}: bad modifier `{name}`"))?);
		}
		Ok(style)
	}
}

/// A parsed theme file and whether it claims to be the default.
pub(super) struct LoadedTheme {
	pub(super) registration: ThemeRegistration,
	pub(super) is_default: bool,
}

/// Parse a TOML theme definition. `origin` labels errors.
pub(super) fn parse_theme(text: &str, origin: &str) -> Result<LoadedTheme> {
	let document: ThemeDocument =
		toml::from_str(text).with_context(|| format!("failed to parse theme definition {origin}"))?;
	let theme = document.styles.into_theme(origin)?;
	let aliases = document
		.aliases
		.into_iter()
		.map(|alias| alias.trim().to_ascii_lowercase())
		.filter(|alias| !alias.is_empty());
	Ok(LoadedTheme {
		registration: ThemeRegistration::new(document.name, theme).aliases(aliases),
		is_default: document.default,
	})
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();
	if let Some(hex) = value.strip_prefix('#') {
		if hex.len() != 6 {
			bail!("hex colours must be 6 characters long");
		}
		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&hex[range], 16).with_context(|| format!("invalid hex colour `#{hex}`"))
		};
		return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
	}
	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}
	let color = match normalise(value).as_str() {
		"reset" | "default" => Color::Reset,
		"black" => Color::Black,
		"red" => Color::Red,
		"green" => Color::Green,
		"yellow" => Color::Yellow,
		"blue" => Color::Blue,
		"magenta" => Color::Magenta,
		"cyan" => Color::Cyan,
		"gray" | "grey" => Color::Gray,
		"dark_gray" | "dark_grey" => Color::DarkGray,
		"white" => Color::White,
		other => bail!("unknown colour `{other}`"),
	};
	Ok(color)
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	let modifier = match normalise(input).as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"reversed" | "reverse" => Modifier::REVERSED,
		other => bail!("unknown modifier `{other}`"),
	};
	Ok(modifier)
}

fn normalise(value: &str) -> String {
	value.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}
