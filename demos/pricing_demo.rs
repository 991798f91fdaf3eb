// demos/pricing_demo.rs

//! Demonstration of single-quote Black-Scholes pricing
//!
//! Prices the reference scenario (a one-year option struck at 100 with the
//! underlying at 110, 20% volatility, 5% rates) and checks put-call parity
//! on the output.

use anyhow::Result;
use bs_surface::{price, OptionType, QuoteRequest};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let quote = QuoteRequest::new(110.0, 100.0, 1.0, 0.2, 0.05)?;

    println!("Quote request:");
    println!("  Spot:       {:.2}", quote.spot);
    println!("  Strike:     {:.2}", quote.strike);
    println!("  Maturity:   {:.2} years", quote.maturity);
    println!("  Volatility: {:.1}%", quote.volatility * 100.0);
    println!("  Rate:       {:.1}%", quote.rate * 100.0);

    let call = price(
        OptionType::Call,
        quote.spot,
        quote.strike,
        quote.maturity,
        quote.volatility,
        quote.rate,
    )?;
    let put = price(
        OptionType::Put,
        quote.spot,
        quote.strike,
        quote.maturity,
        quote.volatility,
        quote.rate,
    )?;

    println!("\nPrices:");
    println!("  Call: {:.4}", call);
    println!("  Put:  {:.4}", put);

    let forward_value = quote.spot - quote.discounted_strike();
    println!("\nPut-call parity check:");
    println!("  C - P:        {:.6}", call - put);
    println!("  S - K*e^-rT:  {:.6}", forward_value);

    Ok(())
}
