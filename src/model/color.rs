use crate::foundation::core::Rgba8;

/// Parse an annotation color string.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (case-insensitive, leading `#` optional) and a
/// handful of CSS color keywords.
pub fn parse_color(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    if let Some(named) = named_color(s) {
        return Ok(named);
    }
    parse_hex(s)
}

fn named_color(s: &str) -> Option<Rgba8> {
    let c = match s.to_ascii_lowercase().as_str() {
        "black" => Rgba8::BLACK,
        "white" => Rgba8::WHITE,
        "red" => Rgba8::RED,
        "green" => Rgba8::rgb(0, 128, 0),
        "blue" => Rgba8::rgb(0, 0, 255),
        "yellow" => Rgba8::rgb(255, 255, 0),
        "orange" => Rgba8::rgb(255, 165, 0),
        "purple" => Rgba8::rgb(128, 0, 128),
        _ => return None,
    };
    Some(c)
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    fn hex_nibble(c: &str) -> Result<u8, String> {
        let v = u8::from_str_radix(c, 16).map_err(|_| format!("invalid hex digit \"{c}\""))?;
        Ok(v * 17)
    }

    let (r, g, b, a) = match s.len() {
        3 | 4 => {
            let r = hex_nibble(&s[0..1])?;
            let g = hex_nibble(&s[1..2])?;
            let b = hex_nibble(&s[2..3])?;
            let a = if s.len() == 4 {
                hex_nibble(&s[3..4])?
            } else {
                255
            };
            (r, g, b, a)
        }
        6 | 8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            let a = if s.len() == 8 {
                hex_byte(&s[6..8])?
            } else {
                255
            };
            (r, g, b, a)
        }
        _ => {
            return Err(
                "hex color must be #RGB, #RGBA, #RRGGBB or #RRGGBBAA (case-insensitive)"
                    .to_owned(),
            );
        }
    };

    Ok(Rgba8 { r, g, b, a })
}

#[cfg(test)]
#[path = "../../tests/unit/model/color.rs"]
mod tests;
