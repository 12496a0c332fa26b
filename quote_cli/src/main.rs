//! # Quote CLI
//!
//! Command-line front end for the quoting engine: feed it a JSON request
//! (the same wire format the storefront submits) and it prints the quote,
//! the itemized cost terms, and the audit record the checkout handler
//! would store. Useful for reconciling a disputed cart price against the
//! engine without spinning up the storefront.
//!
//! ## Usage
//!
//! ```text
//! quote-cli request.json        # quote a request file
//! quote-cli -                   # read the request from stdin
//! quote-cli convert 25.4 mm inch
//! quote-cli materials           # list the stock material database
//! ```

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use quote_core::audit::QuoteAudit;
use quote_core::discounts::applicable_discount;
use quote_core::materials::StockMaterial;
use quote_core::units::{convert, format_for_display, LengthUnit};
use quote_core::{calculate_price_and_weight, QuoteRequest, DEFAULT_PRICING};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("convert") => run_convert(&args[1..]),
        Some("materials") => run_materials(),
        Some(path) => run_quote(read_request_source(path)),
        None => run_quote(read_request_source("-")),
    }
}

fn read_request_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().lock().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}

fn run_quote(source: io::Result<String>) -> ExitCode {
    let raw = match source {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error reading request: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let request: QuoteRequest = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error parsing request JSON: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = request.validate() {
        // The engine will still quote; surface what the order form would
        // have flagged so a floored result isn't mistaken for a real price.
        eprintln!("Warning: {}", e);
    }

    let quote = calculate_price_and_weight(&request, &DEFAULT_PRICING);
    let quantity = request.quantity.max(1);
    let order_total = quote.price_value() * quantity as f64;

    println!("═══════════════════════════════════════");
    println!("  CUSTOM PART QUOTE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Shape:    {}", request.form_type);
    println!("  Quantity: {}", quantity);
    println!();
    println!("Quote (per unit):");
    println!("  Weight:   {:.3} kg", quote.weight);
    println!("  Price:    ${}", quote.price);
    println!();
    println!("Breakdown (per unit):");
    println!("  Material:           ${:.2}", quote.breakdown.material);
    println!("  Precision:          ${:.2}", quote.breakdown.precision);
    println!("  Oversize:           ${:.2}", quote.breakdown.oversize);
    println!("  Shipping:           ${:.2}", quote.breakdown.shipping);
    println!("  Machining setup:    ${:.2}", quote.breakdown.machining_base);
    println!("  Machining material: ${:.2}", quote.breakdown.machining_material);
    println!();
    println!("Order total: ${:.2}", order_total);
    if let Some(discount) = applicable_discount(order_total) {
        println!("  Code {} applies: {}", discount.code, discount.description);
    }
    println!("═══════════════════════════════════════");

    let audit = QuoteAudit::new(request, quote);
    println!();
    println!("Audit record (variant metafield JSON):");
    match audit.to_json_pretty() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing audit record: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn run_convert(args: &[String]) -> ExitCode {
    let (value, from, to) = match args {
        [value, from, to] => (value, from, to),
        _ => {
            eprintln!("Usage: quote-cli convert <value> <from> <to>");
            eprintln!("Units: mm, inch, m, ft");
            return ExitCode::FAILURE;
        }
    };

    let value: f64 = match value.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Error: '{}' is not a number", value);
            return ExitCode::FAILURE;
        }
    };

    let (from, to) = match (LengthUnit::parse(from), LengthUnit::parse(to)) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            eprintln!("Error: units must be one of mm, inch, m, ft");
            return ExitCode::FAILURE;
        }
    };

    let converted = convert(value, from, to);
    println!(
        "{} {} = {} {}",
        format_for_display(value),
        from.label(),
        format_for_display(converted),
        to.label()
    );
    ExitCode::SUCCESS
}

fn run_materials() -> ExitCode {
    println!("Stock materials:");
    for material in StockMaterial::ALL {
        let props = material.properties();
        println!(
            "  {:8} {:.2} g/cm³  ${:.2}/kg",
            material.display_name(),
            props.density_g_cm3,
            props.reference_unit_price
        );
    }
    ExitCode::SUCCESS
}
