use std::io;
use std::process;

use library_catalog::console;
use library_catalog::domain::{Book, Catalog, Member};
use library_catalog::report;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing (stdout belongs to the interactive menu, logs go to stderr)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    println!("Welcome to the library!");

    // Seed the catalog with the demonstration data set
    let mut catalog = seed_catalog();
    tracing::info!("Catalog seeded: {}", catalog);

    // Show the count summary and the full status report before the menu
    println!("{catalog}");
    println!();
    print!("{}", report::render(&catalog));

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = console::run(&mut catalog, stdin.lock(), stdout.lock()) {
        tracing::error!("Console session failed: {}", e);
        process::exit(1);
    }
}

/// Demonstration data: one book of each kind plus a second physical book,
/// two members, two loans and one return.
fn seed_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    let java = Book::new("Java Programming", "John Doe");
    let patterns = Book::physical("Design Patterns", "Jane Smith", 300);
    let structures = Book::digital("Data Structures", "Bob Johnson", "PDF");
    let metamorphosis = Book::physical("Metamorfose", "Franz Kafka", 95);

    let alice = Member::new("Alice");
    let bob = Member::new("Bob");

    catalog.register_book(java.clone());
    catalog.register_book(patterns.clone());
    catalog.register_book(structures);
    catalog.register_book(metamorphosis);
    catalog.register_member(alice.clone());
    catalog.register_member(bob.clone());

    catalog.lend(&java, &alice);
    catalog.lend(&patterns, &bob);
    catalog.return_book(&java, &alice);

    catalog
}
