// demos/pricing_demo.rs

//! Demonstration of Black-76 pricing for options on futures
//!
//! This example shows how to:
//! 1. Price calls and puts with the free functions
//! 2. Check put-call parity on the results
//! 3. Use a configured pricer and handle domain errors

use anyhow::Result;
use black76_lib::{
    black_76_call, black_76_put, default_configs, parity_residual, Black76Pricer, FuturesOption,
};

fn main() -> Result<()> {
    println!("Black-76 Futures Option Pricing Demo");
    println!("====================================");

    // Crude oil style contract: F=75, r=4.5%, sigma=35%, three months
    let forward = 75.0;
    let t = 0.25;
    let r = 0.045;
    let sigma = 0.35;

    println!("\nStep 1: Pricing a strike ladder...");
    println!(
        "{:<8} {:<12} {:<12} {:<12}",
        "Strike", "Call", "Put", "Parity err"
    );
    println!("{}", "-".repeat(48));

    for strike in [60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0] {
        let call = black_76_call(forward, strike, t, r, sigma)?;
        let put = black_76_put(forward, strike, t, r, sigma)?;
        let residual = parity_residual(forward, strike, t, r, sigma)?;
        println!(
            "{:<8.1} {:<12.6} {:<12.6} {:<12.2e}",
            strike, call, put, residual
        );
    }

    println!("\nStep 2: Pricing contracts with a strict pricer...");
    let pricer = Black76Pricer::new(default_configs::strict());
    let contracts = [
        FuturesOption::call(4200.0, 4000.0, 0.75, 0.045, 0.18),
        FuturesOption::put(95.5, 100.0, 2.0, -0.005, 0.12),
        FuturesOption::call(100.0, 100.0, 0.0, 0.05, 0.2),
    ];

    for option in &contracts {
        match pricer.price_option(option) {
            Ok(price) => println!(
                "  {} F={} K={} T={}: {:.6}",
                option.option_type, option.forward, option.strike, option.time_to_expiry, price
            ),
            Err(e) => println!(
                "  {} F={} K={} T={}: rejected ({}), intrinsic {:.2}",
                option.option_type,
                option.forward,
                option.strike,
                option.time_to_expiry,
                e,
                option.discounted_intrinsic()
            ),
        }
    }

    Ok(())
}
