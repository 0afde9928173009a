//! Seeded dataset generation
//!
//! Builds the four catalog datasets and their present/absent test cases.
//! All randomness comes from the generator's own `SmallRng`, so the same
//! seed always produces the same files.

use std::collections::BTreeSet;
use std::path::PathBuf;

use log::info;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::catalog::{CONFIG_SETTINGS, CUSTOMER_IDS, DICTIONARY_WORDS, PRODUCT_CATALOG};
use super::{DatasetSpec, DatasetStore, TargetSet, TestCases};
use crate::Result;

const FIRST_CUSTOMER_ID: i64 = 1_000_000;
const FIRST_ABSENT_CUSTOMER_ID: i64 = 1_200_000;
const FIRST_ABSENT_PRODUCT: usize = 60_000;

const WORD_PREFIXES: [&str; 10] = [
    "app", "data", "user", "sys", "log", "auth", "file", "net", "cache", "queue",
];
const WORD_SUFFIXES: [&str; 8] = [
    "handler", "manager", "service", "provider", "controller", "processor", "validator", "factory",
];

/// Files written by [`DatasetGenerator::generate_all`]
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub seed: u64,
    pub datasets: Vec<(DatasetSpec, PathBuf)>,
    pub test_cases: PathBuf,
}

/// Dataset generator owning an explicit random source
pub struct DatasetGenerator {
    seed: u64,
    rng: SmallRng,
}

impl DatasetGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Customer IDs 1,000,000..1,100,000 in arrival (shuffled) order
    pub fn customer_ids(&mut self) -> Vec<i64> {
        let end = FIRST_CUSTOMER_ID + CUSTOMER_IDS.size as i64;
        let mut ids: Vec<i64> = (FIRST_CUSTOMER_ID..end).collect();
        ids.shuffle(&mut self.rng);
        ids
    }

    /// Product codes `PROD000000`.. kept in sorted order
    pub fn product_catalog(&self) -> Vec<String> {
        (0..PRODUCT_CATALOG.size).map(product_code).collect()
    }

    /// Configuration keys `config.setting.NNN` in shuffled order
    pub fn config_settings(&mut self) -> Vec<String> {
        let mut keys: Vec<String> = (0..CONFIG_SETTINGS.size)
            .map(|i| format!("config.setting.{:03}", i))
            .collect();
        keys.shuffle(&mut self.rng);
        keys
    }

    /// Sorted, deduplicated dictionary words
    ///
    /// The first half combines a random prefix and suffix with the word's
    /// number; the second half is `wordNNNNN`.
    pub fn dictionary_words(&mut self) -> Vec<String> {
        let half = DICTIONARY_WORDS.size / 2;
        let mut words = BTreeSet::new();
        for i in 0..DICTIONARY_WORDS.size {
            let word = if i < half {
                let prefix = WORD_PREFIXES[self.rng.gen_range(0..WORD_PREFIXES.len())];
                let suffix = WORD_SUFFIXES[self.rng.gen_range(0..WORD_SUFFIXES.len())];
                format!("{}{}{}", prefix, suffix, i)
            } else {
                format!("word{:05}", i)
            };
            words.insert(word);
        }
        words.into_iter().take(DICTIONARY_WORDS.size).collect()
    }

    /// Draw `count` distinct elements from `data`
    pub fn sample<T: Clone>(&mut self, data: &[T], count: usize) -> Vec<T> {
        data.choose_multiple(&mut self.rng, count).cloned().collect()
    }

    /// Generate every dataset and the test-case file into `store`
    pub fn generate_all(&mut self, store: &DatasetStore) -> Result<GenerationSummary> {
        let mut cases = TestCases::new();
        let mut datasets = Vec::with_capacity(4);

        let customer_ids = self.customer_ids();
        let targets = TargetSet {
            present: self.sample(&customer_ids, CUSTOMER_IDS.present_samples),
            absent: (0..CUSTOMER_IDS.absent_samples as i64)
                .map(|i| FIRST_ABSENT_CUSTOMER_ID + i)
                .collect(),
        };
        cases.insert(CUSTOMER_IDS.name, &targets)?;
        datasets.push((CUSTOMER_IDS, self.write(store, &CUSTOMER_IDS, &customer_ids)?));

        let products = self.product_catalog();
        let targets = TargetSet {
            present: self.sample(&products, PRODUCT_CATALOG.present_samples),
            absent: (0..PRODUCT_CATALOG.absent_samples)
                .map(|i| product_code(FIRST_ABSENT_PRODUCT + i))
                .collect(),
        };
        cases.insert(PRODUCT_CATALOG.name, &targets)?;
        datasets.push((PRODUCT_CATALOG, self.write(store, &PRODUCT_CATALOG, &products)?));

        let settings = self.config_settings();
        let targets = TargetSet {
            present: self.sample(&settings, CONFIG_SETTINGS.present_samples),
            absent: (0..CONFIG_SETTINGS.absent_samples)
                .map(|i| format!("config.missing.{:03}", i))
                .collect(),
        };
        cases.insert(CONFIG_SETTINGS.name, &targets)?;
        datasets.push((CONFIG_SETTINGS, self.write(store, &CONFIG_SETTINGS, &settings)?));

        let words = self.dictionary_words();
        let targets = TargetSet {
            present: self.sample(&words, DICTIONARY_WORDS.present_samples),
            absent: (0..DICTIONARY_WORDS.absent_samples)
                .map(|i| format!("zzz_notfound_{}", i))
                .collect(),
        };
        cases.insert(DICTIONARY_WORDS.name, &targets)?;
        datasets.push((DICTIONARY_WORDS, self.write(store, &DICTIONARY_WORDS, &words)?));

        let test_cases = store.save_test_cases(&cases)?;
        info!("test cases written to {}", test_cases.display());

        Ok(GenerationSummary {
            seed: self.seed,
            datasets,
            test_cases,
        })
    }

    fn write<T: serde::Serialize>(
        &self,
        store: &DatasetStore,
        spec: &DatasetSpec,
        data: &[T],
    ) -> Result<PathBuf> {
        let path = store.save_dataset(spec, data)?;
        info!("{}: {} entries written to {}", spec.name, data.len(), path.display());
        Ok(path)
    }
}

fn product_code(i: usize) -> String {
    format!("PROD{:06}", i)
}
