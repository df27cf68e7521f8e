//! Concurrent reads of a shared flat trie

use lexitrie::prelude::*;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_parallel_reads() {
    let terms: Vec<String> = (0..1000).map(|i| format!("term{}", i)).collect();
    let trie: Trie = Trie::from_terms(&terms);
    let flat = Arc::new(trie.flattened());
    drop(trie);

    const NUM_READERS: usize = 8;
    let barrier = Arc::new(Barrier::new(NUM_READERS));

    let handles: Vec<_> = (0..NUM_READERS)
        .map(|i| {
            let flat = Arc::clone(&flat);
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                // All threads start querying at the same time
                barrier.wait();

                let mut exact = 0;
                for j in 0..100 {
                    let query = format!("term{}", (i * 100 + j) % 1000);
                    if flat.find(&query) == MatchKind::Exact {
                        exact += 1;
                    }
                }
                let completions = flat.complete(&format!("term{}", i + 1)).len();
                (exact, completions)
            })
        })
        .collect();

    for handle in handles {
        let (exact, completions) = handle.join().unwrap();
        assert_eq!(exact, 100);
        // "termN", "termN0".."termN9" and "termN00".."termN99" for N in 1..=8
        assert_eq!(completions, 111);
    }
}

#[test]
fn test_flat_trie_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FlatTrie>();
    assert_send_sync::<FlatTrie<char>>();
    assert_send_sync::<Trie>();
}

#[test]
fn test_scoped_readers_share_borrow() {
    let trie: Trie = Trie::from_terms(["alpha", "alps", "beta"]);
    let flat = trie.flattened();

    thread::scope(|scope| {
        let readers: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| flat.complete("al")))
            .collect();
        for reader in readers {
            assert_eq!(reader.join().unwrap(), vec!["alpha", "alps"]);
        }
    });
}
