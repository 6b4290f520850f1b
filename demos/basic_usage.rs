// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_point::prelude::*;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fixed-Point Example ===\n");

    // Construction
    let price: Unsigned = "150.3".parse()?;
    let quantity = Unsigned::from_unscaled_u64(3)?;
    println!("price    = {}", price);
    println!("quantity = {}", quantity);

    // Core arithmetic
    println!("\n=== Core Arithmetic ===");
    println!("price + quantity = {}", price.checked_add(quantity)?);
    println!("price - quantity = {}", price.checked_sub(quantity)?);
    println!("price * quantity = {}", price.checked_mul(quantity)?);
    println!("price / quantity = {}", price.checked_div(quantity)?);
    println!("1 / 3            = {}", Unsigned::ONE.checked_div(quantity)?);

    // Mixed arithmetic against plain integers
    println!("\n=== Mixed Arithmetic ===");
    let ten = U256::from(10u64);
    println!("price + 10 = {}", price.checked_add_unscaled(ten)?);
    println!("price * 10 = {}", price.checked_mul_unscaled(ten)?);
    println!("price / 10 = {}", price.checked_div_unscaled(ten)?);
    println!("10 / price = {}", Unsigned::checked_unscaled_div(ten, price)?);
    println!("price > 10 ? {}", price.is_greater_than_unscaled(ten));

    // Compound growth
    println!("\n=== Compound Growth ===");
    let rate: Unsigned = "1.05".parse()?;
    for periods in 0..=5 {
        println!("1.05^{} = {}", periods, rate.checked_pow(periods)?);
    }

    // Failures are reported, never wrapped
    println!("\n=== Failures ===");
    let cases = [
        ("1 - 2", Unsigned::ONE.checked_sub("2".parse()?)),
        ("1 / 0", Unsigned::ONE.checked_div(Unsigned::ZERO)),
        ("MAX + 1", Unsigned::MAX.checked_add(Unsigned::ONE)),
        ("1 + 10^60", Unsigned::ONE.checked_add_unscaled(U256::exp10(60))),
        ("10^60", Unsigned::from_unscaled(U256::exp10(60))),
    ];
    for (label, result) in cases {
        match result {
            Ok(value) => println!("  {:<10} -> {}", label, value),
            Err(err) => println!("  {:<10} -> error: {}", label, err),
        }
    }

    Ok(())
}
