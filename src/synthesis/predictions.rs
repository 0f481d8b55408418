use super::models::{AiPredictions, DayForecast};
use super::random::RandomSource;

struct Outlook {
    summary: &'static str,
    recommendations: [&'static str; 3],
}

const HOT_AND_DRY: Outlook = Outlook {
    summary: "Hot and dry conditions expected. High evaporation rates likely.",
    recommendations: [
        "Increase irrigation frequency by 20-30%",
        "Consider early morning watering to reduce evaporation",
        "Monitor soil moisture levels closely",
    ],
};

const WET_PERIOD: Outlook = Outlook {
    summary: "Wet period ahead. Risk of waterlogging and fungal diseases.",
    recommendations: [
        "Reduce or pause irrigation systems",
        "Ensure proper drainage in low-lying areas",
        "Apply preventive fungicide treatments",
    ],
};

const COOL: Outlook = Outlook {
    summary: "Cooler temperatures predicted. Slower plant growth expected.",
    recommendations: [
        "Consider frost protection measures",
        "Delay planting of warm-season crops",
        "Harvest cold-sensitive crops early",
    ],
};

const BALANCED: Outlook = Outlook {
    summary: "Balanced weather conditions. Optimal for most farming activities.",
    recommendations: [
        "Ideal time for general maintenance",
        "Good conditions for planting and harvesting",
        "Standard irrigation schedule recommended",
    ],
};

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let len = values.len();
    if len == 0 {
        return 0.0;
    }
    values.sum::<f64>() / len as f64
}

/// First matching branch wins
fn outlook(avg_high: f64, avg_precipitation: f64) -> &'static Outlook {
    if avg_high > 25.0 && avg_precipitation < 20.0 {
        &HOT_AND_DRY
    } else if avg_precipitation > 60.0 {
        &WET_PERIOD
    } else if avg_high < 15.0 {
        &COOL
    } else {
        &BALANCED
    }
}

/// Templated summary chosen from forecast averages, with a synthetic
/// confidence in `[85, 95)` drawn independently of the branch.
pub fn derive_predictions<R: RandomSource + ?Sized>(
    forecast: &[DayForecast],
    rng: &mut R,
) -> AiPredictions {
    let avg_high = mean(forecast.iter().map(|day| f64::from(day.high)));
    let avg_precipitation = mean(forecast.iter().map(|day| f64::from(day.precipitation)));
    let confidence = 85 + rng.below(10);

    let chosen = outlook(avg_high, avg_precipitation);

    AiPredictions {
        summary: chosen.summary.to_string(),
        confidence,
        recommendations: chosen
            .recommendations
            .iter()
            .map(|r| r.to_string())
            .collect(),
    }
}
