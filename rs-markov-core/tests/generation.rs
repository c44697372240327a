//! End-to-end tests against the public API only: tokenize a corpus, build
//! a chain, generate with a seeded generator.

use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_markov_core::ChainError;
use rs_markov_core::io::tokenize;
use rs_markov_core::model::markov_chain::MarkovChain;

const CORPUS: &str = "\
the sun rises and the sun sets.
the moon rises and the moon sets.
the sun and the moon share the sky.
";

fn build_chain(chain_size: usize) -> MarkovChain<String> {
    let tokens = tokenize(CORPUS);
    let mut chain = MarkovChain::new(chain_size).unwrap();
    chain.add_data(&tokens).unwrap();
    chain
}

#[test]
fn builds_and_generates_from_corpus_text() {
    let chain = build_chain(2);
    assert!(!chain.is_empty());

    let mut rng = StdRng::seed_from_u64(7);
    let generated = chain.generate(25, &mut rng).unwrap();
    assert!(!generated.is_empty());
    assert!(generated.len() <= 25);

    // Every emitted token comes from the training vocabulary
    let vocabulary = tokenize(CORPUS);
    for token in &generated {
        assert!(vocabulary.contains(token), "unknown token {token:?}");
    }
}

#[test]
fn same_seed_same_output() {
    let chain = build_chain(2);
    let mut first = StdRng::seed_from_u64(2024);
    let mut second = StdRng::seed_from_u64(2024);
    assert_eq!(
        chain.generate(25, &mut first).unwrap(),
        chain.generate(25, &mut second).unwrap()
    );
}

#[test]
fn corpus_accumulates_across_add_data_calls() {
    let mut chain = MarkovChain::new(2).unwrap();
    chain.add_data(&tokenize("the sun rises")).unwrap();
    let after_first = chain.state_count();
    chain.add_data(&tokenize("the sun sets")).unwrap();

    // Shared window ("the","sun") is reused, the rest is new
    assert!(chain.state_count() > after_first);
    assert!(chain.state_count() < after_first * 2 + 1);
}

#[test]
fn error_paths_are_typed() {
    assert_eq!(
        MarkovChain::<String>::new(0).unwrap_err(),
        ChainError::InvalidConfiguration(0)
    );

    let mut chain = MarkovChain::new(4).unwrap();
    assert!(matches!(
        chain.add_data(&tokenize("too short")).unwrap_err(),
        ChainError::InsufficientData {
            expected: 4,
            actual: 2
        }
    ));

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        chain.generate(10, &mut rng).unwrap_err(),
        ChainError::EmptyChain
    );
}

#[test]
fn debug_dump_lists_every_state() {
    let chain = build_chain(2);
    let dump = chain.debug_dump();
    assert_eq!(dump.lines().count(), chain.state_count());
    assert!(dump.contains("(\"the\",\"sun\")"));
}
