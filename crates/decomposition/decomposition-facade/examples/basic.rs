//! Basic example demonstrating a decomposition analysis
//!
//! Run with: cargo run --example basic -p decomposition-facade

use decomposition_facade::prelude::*;

fn main() -> Result<()> {
    println!("=== Decomposition Basic Examples ===\n");

    // Two years of monthly data: growth plus a yearly cycle
    let data: Vec<Observation> = (0..24)
        .map(|i| {
            let x = i as f64;
            let cycle = 10.0 * (2.0 * std::f64::consts::PI * x / 12.0).sin();
            Observation::new(i as i64, 100.0 + 2.0 * x + cycle)
        })
        .collect();

    // 1. Decomposition
    println!("1. Additive decomposition (period=12)");
    let result = decompose(&data, 12)?;
    let fmt = |v: &Option<f64>| v.map_or("-".to_string(), |x| format!("{:.2}", x));
    println!("   Trend: {:?}", result.trend.iter().map(fmt).collect::<Vec<_>>());
    println!(
        "   Seasonal profile: {:?}\n",
        result.seasonal_profile.iter().map(|x| format!("{:.2}", x)).collect::<Vec<_>>()
    );

    // 2. Trend line
    println!("2. Trend fit");
    println!("   Slope: {:+.4}", result.slope);
    println!("   R-squared: {:.4}", result.r_squared);
    println!("   Direction: {}\n", result.trend_direction());

    // 3. Autocorrelation
    println!("3. Autocorrelation (max lag 12)");
    let values: Vec<f64> = data.iter().map(|o| o.value).collect();
    for entry in calculate_acf(&values, 12) {
        println!("   lag {:>2}: {:+.3}", entry.lag, entry.correlation);
    }

    // 4. Full analysis with a narrative summary
    println!("\n4. Analyzer (preset: fiscal)");
    let analysis = AnalysisConfig::preset(SeasonalPeriod::Fiscal)
        .analyzer()?
        .analyze_with_narrative(&data, &TemplateNarrator)?;
    if let Some(summary) = analysis.summary {
        println!("   {}", summary.interpretation);
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
