use data_loader::ListingIndex;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/listings.json");

    println!("Loading listings dataset...\n");

    let start = Instant::now();
    let index = ListingIndex::load_from_file(path).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let facets = index.facets();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Listings: {}", index.len());
    println!("Locations: {}", facets.locations.join(", "));
    println!("Modalities: {}", facets.modalities.len());
    println!("Levels: {}", facets.levels.len());
    println!(
        "\nPerformance: {:.0} listings/second",
        index.len() as f64 / elapsed.as_secs_f64()
    );
}
