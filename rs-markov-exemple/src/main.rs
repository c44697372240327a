use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_markov_core::io::read_corpus;
use rs_markov_core::model::markov_chain::MarkovChain;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Corpus file: first CLI argument, or a bundled default
    let filename = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/corpus.txt".to_owned());

    // Read and tokenize the whole corpus up front
    let begin_read = Instant::now();
    let tokens = read_corpus(&filename)?;
    let elapsed_read = begin_read.elapsed();

    // Two tokens of context per state
    let mut chain = MarkovChain::new(2)?;

    let begin_data = Instant::now();
    chain.add_data(&tokens)?;
    let elapsed_data = begin_data.elapsed();

    // println!("{}", chain.debug_dump());

    // OS-seeded for varied output; swap in seed_from_u64 for
    // reproducible runs
    let mut rng = StdRng::from_os_rng();

    let num_sequences: u32 = 10;
    let sequence_length = 25;

    let begin_gen = Instant::now();
    println!("\n");
    for _ in 0..num_sequences {
        // Short results are normal: the walk stops early when it reaches
        // a window that never had a successor in the corpus
        let text = chain.generate(sequence_length, &mut rng)?;
        println!("{}\n", text.join(" "));
    }
    println!();
    let elapsed_gen = begin_gen.elapsed() / num_sequences;

    println!("Read file:\t{:?}", elapsed_read);
    println!("Data add:\t{:?}", elapsed_data);
    println!("Avg sequence:\t{:?}\n", elapsed_gen);

    Ok(())
}
