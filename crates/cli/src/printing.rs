use anyhow::Result;
use bintext_analysis::WidthProfile;
use bintext_codec::DigitWidth;

/// Render distribution profiles as `pretty` text or `json`.
pub fn render_profiles(profiles: &[WidthProfile], format: &str) -> Result<String> {
    match format {
        "pretty" => Ok(render_pretty(profiles)),
        "json" => Ok(serde_json::to_string_pretty(profiles)?),
        _ => anyhow::bail!("Unknown format '{format}'. Use: pretty or json"),
    }
}

fn unit_name(width: DigitWidth) -> String {
    match width.get() {
        8 => "bytes".to_string(),
        4 => "nibbles".to_string(),
        1 => "bits".to_string(),
        n => format!("{n}-digit chunks"),
    }
}

fn render_pretty(profiles: &[WidthProfile]) -> String {
    let mut out = String::new();
    for profile in profiles {
        let dist = &profile.distribution;
        out.push_str(&format!(
            "\n📊 Width {} ({})\n\
             {}\n\
             Chunks: {}  Distinct values: {}  Entropy: {:.4} bits/chunk\n",
            profile.width,
            unit_name(profile.width),
            "=".repeat(50),
            dist.total(),
            dist.len(),
            dist.entropy(),
        ));
        for ((value, probability), (_, count)) in dist.iter().zip(dist.counts()) {
            out.push_str(&format!("  {value:>6}: {probability:.6} ({count})\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bintext_analysis::Distribution;

    fn sample() -> Vec<WidthProfile> {
        vec![WidthProfile {
            width: DigitWidth::BIT,
            distribution: Distribution::from_values(&[0, 0, 1, 1, 1]).unwrap(),
        }]
    }

    #[test]
    fn test_render_pretty() {
        let text = render_profiles(&sample(), "pretty").unwrap();
        assert!(text.contains("Width 1 (bits)"));
        assert!(text.contains("Chunks: 5"));
        assert!(text.contains("0: 0.400000 (2)"));
        assert!(text.contains("1: 0.600000 (3)"));
    }

    #[test]
    fn test_render_json() {
        let text = render_profiles(&sample(), "json").unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json[0]["width"], 1);
        assert_eq!(json[0]["distribution"]["total"], 5);
        assert_eq!(json[0]["distribution"]["counts"]["0"], 2);
    }

    #[test]
    fn test_render_unknown_format() {
        let err = render_profiles(&sample(), "xml").unwrap_err();
        assert!(err.to_string().contains("Unknown format"));
    }
}
