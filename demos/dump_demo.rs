use chain_hash::ChainedHashTable;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Number of values to insert.
    #[arg(short = 'n', long = "count", default_value_t = 24)]
    count: u64,

    /// Initial bucket count (0 uses the default of 4).
    #[arg(short = 'b', long = "buckets", default_value_t = 0)]
    buckets: usize,
}

fn main() {
    let args = Args::parse();

    let mut table: ChainedHashTable<u64> = ChainedHashTable::with_bucket_count(args.buckets);
    println!("Starting with {} buckets", table.bucket_count());

    let mut growths = 0;
    for value in 0..args.count {
        let before = table.bucket_count();
        table.insert(value);
        if table.bucket_count() != before {
            growths += 1;
            println!(
                "insert #{:3}: grew {} -> {} buckets (load factor now {:.2})",
                value + 1,
                before,
                table.bucket_count(),
                table.load_factor()
            );
        }
    }

    println!(
        "Inserted {} values, {} growth passes, final load factor {:.2}",
        table.len(),
        growths,
        table.load_factor()
    );
    println!();
    println!("{}", table.display());
}
