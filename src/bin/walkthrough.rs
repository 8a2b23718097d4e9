//! Narrative walkthrough of the four worked solutions.
//!
//! Run with: cargo run --bin walkthrough

use colored::Colorize;
use std::collections::HashSet;

use oop_patterns::channel::create_channel;
use oop_patterns::product::Product;
use oop_patterns::registry::Database;
use oop_patterns::user::User;

fn banner(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

fn main() {
    banner("Product: identity equality, dedup, two sort orders");
    product_walkthrough();

    banner("Database: lazy singleton with a connection state machine");
    registry_walkthrough();

    banner("Channels: factory over a closed variant set");
    channel_walkthrough();

    banner("User: fluent builder with required-field validation");
    builder_walkthrough();
}

fn product_walkthrough() {
    let entries = [
        Product::new("P001", "Laptop", 999.99, 4.5),
        Product::new("P002", "Keyboard", 79.99, 4.7),
        Product::new("P003", "Mouse", 29.99, 4.3),
        Product::new("P001", "Gaming Laptop", 1099.99, 4.8),
    ];

    let mut catalog: HashSet<Product> = HashSet::new();
    for product in &entries {
        if catalog.insert(product.clone()) {
            println!("  {} {}", "added".green(), product);
        } else {
            println!("  {} {} (duplicate id)", "skipped".yellow(), product);
        }
    }
    println!("  catalog holds {} distinct products", catalog.len());

    let mut by_price: Vec<Product> = catalog.iter().cloned().collect();
    by_price.sort_by(Product::price_then_rating);
    println!("\n  by price (ties: higher rating first):");
    for product in &by_price {
        println!("    {product}");
    }

    let mut by_name: Vec<Product> = catalog.into_iter().collect();
    by_name.sort_by(Product::by_name);
    println!("  by name:");
    for product in &by_name {
        println!("    {product}");
    }
}

fn registry_walkthrough() {
    let first = Database::instance();
    let second = Database::instance();
    println!(
        "  two call sites, same instance: {}",
        std::ptr::eq(first, second).to_string().green()
    );

    match first.query("SELECT * FROM users") {
        Ok(report) => println!("  {report}"),
        Err(e) => println!("  {} {e}", "query refused:".red()),
    }

    if first.connect() {
        println!("  {}", "connected".green());
    }
    if !second.connect() {
        println!("  second connect: already connected, nothing to do");
    }

    match second.query("SELECT * FROM users") {
        Ok(report) => println!("  {report}"),
        Err(e) => println!("  {} {e}", "query refused:".red()),
    }

    first.disconnect();
    match first.query("SELECT 1") {
        Ok(report) => println!("  {report}"),
        Err(e) => println!("  {} {e}", "query refused:".red()),
    }
}

fn channel_walkthrough() {
    for kind in ["EMAIL", "sms", "Push"] {
        match create_channel(Some(kind)) {
            Ok(channel) => println!(
                "  '{}' -> {} channel, {}",
                kind,
                channel.kind(),
                channel.send("your order has shipped")
            ),
            Err(e) => println!("  '{}' -> {} {e}", kind, "error:".red()),
        }
    }

    for (label, kind) in [("'fax'", Some("fax")), ("<none>", None)] {
        match create_channel(kind) {
            Ok(channel) => println!("  {label} -> unexpected {} channel", channel.kind()),
            Err(e) => println!("  {label} -> {} {e}", "error:".red()),
        }
    }
}

fn builder_walkthrough() {
    let full = User::builder()
        .username("jdoe")
        .email("jdoe@example.com")
        .first_name("Jordan")
        .last_name("Doe")
        .phone("555-0100");
    let full = match full.age(30) {
        Ok(builder) => builder,
        Err(e) => {
            println!("  {} {e}", "rejected:".red());
            return;
        }
    };

    match full.build() {
        Ok(user) => {
            println!("  built: {user}");
            match serde_json::to_string(&user) {
                Ok(json) => println!("  as JSON: {json}"),
                Err(e) => println!("  {} {e}", "serialization failed:".red()),
            }
        }
        Err(e) => println!("  {} {e}", "build failed:".red()),
    }

    match User::builder()
        .username("minimal")
        .email("minimal@example.com")
        .build()
    {
        Ok(user) => match serde_json::to_string(&user) {
            Ok(json) => println!("  minimal user omits unset fields: {json}"),
            Err(e) => println!("  {} {e}", "serialization failed:".red()),
        },
        Err(e) => println!("  {} {e}", "build failed:".red()),
    }

    match User::builder().email("ghost@example.com").build() {
        Ok(user) => println!("  unexpected success: {user}"),
        Err(e) => println!("  expected failure: {}", e.to_string().yellow()),
    }
}
