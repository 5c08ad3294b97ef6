//! Main record generator and batch driver.

use crate::accumulator::{Accumulator, Category};
use crate::corpus::{Corpus, FakerCorpus};
use crate::generators::{address, numeric, person, sin};
use crate::reference::ReferenceData;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Construction-time generator options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Emit `first_name` and `last_name` instead of a single `name` column.
    pub split_name: bool,
    /// Emit `address1`, `address2`, `city`, `province` and `postal` instead
    /// of a single `address` column.
    pub split_address: bool,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

/// Which categories to generate and how many records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRequest {
    pub record_count: usize,
    pub name: bool,
    pub sin: bool,
    pub address: bool,
    pub wage: bool,
    pub job: bool,
}

impl BatchRequest {
    /// Request `record_count` records of name, SIN, address and wage.
    pub fn new(record_count: usize) -> Self {
        Self {
            record_count,
            name: true,
            sin: true,
            address: true,
            wage: true,
            job: false,
        }
    }

    /// Request every category.
    pub fn all(record_count: usize) -> Self {
        Self {
            job: true,
            ..Self::new(record_count)
        }
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Name => self.name,
            Category::Sin => self.sin,
            Category::Address => self.address,
            Category::Wage => self.wage,
            Category::Job => self.job,
        }
    }

    /// Enabled categories in generation order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(move |category| self.is_enabled(*category))
    }
}

/// Generator that appends noisy fake records to an [`Accumulator`].
///
/// With a seed, the same reference data, corpus and calls produce the same
/// values.
pub struct RecordGenerator<C = FakerCorpus> {
    reference: ReferenceData,
    corpus: C,
    options: GeneratorOptions,
    rng: StdRng,
    data: Accumulator,
}

impl RecordGenerator<FakerCorpus> {
    /// Create a generator that draws names and job titles from `fake`.
    pub fn new(reference: ReferenceData, options: GeneratorOptions) -> Self {
        Self::with_corpus(reference, FakerCorpus, options)
    }
}

impl<C: Corpus> RecordGenerator<C> {
    /// Create a generator with a custom name and job title corpus.
    pub fn with_corpus(reference: ReferenceData, corpus: C, options: GeneratorOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            reference,
            corpus,
            options,
            rng,
            data: Accumulator::new(),
        }
    }

    /// Generate one name, split or as `Last, First`.
    pub fn generate_name(&mut self) {
        let name = person::generate_person_name(&mut self.rng, &self.corpus);
        let values = if self.options.split_name {
            vec![name.first, name.last]
        } else {
            vec![person::format_last_first(&mut self.rng, &name)]
        };
        self.push_category(Category::Name, values);
    }

    /// Generate one SIN.
    pub fn generate_sin(&mut self) {
        let value = sin::generate_sin(&mut self.rng);
        self.push_category(Category::Sin, vec![value]);
    }

    /// Generate one address, split into five columns or as one line.
    pub fn generate_address(&mut self) {
        let values = if self.options.split_address {
            let parts = address::generate_split_address(&mut self.rng, &self.reference);
            vec![
                parts.address1,
                parts.address2,
                parts.city,
                parts.province,
                parts.postal,
            ]
        } else {
            vec![address::generate_single_address(
                &mut self.rng,
                &self.reference,
            )]
        };
        self.push_category(Category::Address, values);
    }

    /// Append one value per field of `category`, in [`Category::fields`] order.
    fn push_category(&mut self, category: Category, values: Vec<String>) {
        let fields = category.fields(self.options.split_name, self.options.split_address);
        debug_assert_eq!(fields.len(), values.len());
        for (field, value) in fields.iter().zip(values) {
            self.data.push(*field, value);
        }
    }

    /// Generate one wage.
    pub fn generate_wage(&mut self) {
        let value = numeric::generate_wage(&mut self.rng);
        self.push_category(Category::Wage, vec![value]);
    }

    /// Generate one job title.
    pub fn generate_job(&mut self) {
        let value = person::generate_job_title(&mut self.rng, &self.corpus);
        self.push_category(Category::Job, vec![value]);
    }

    /// Generate one value set for `category`.
    pub fn generate(&mut self, category: Category) {
        match category {
            Category::Name => self.generate_name(),
            Category::Sin => self.generate_sin(),
            Category::Address => self.generate_address(),
            Category::Wage => self.generate_wage(),
            Category::Job => self.generate_job(),
        }
    }

    /// Run every enabled category `record_count` times, in the order name,
    /// SIN, address, wage, job.
    ///
    /// Values are appended to whatever the accumulator already holds; call
    /// [`reset`](Self::reset) first to start a fresh sheet.
    pub fn generate_sheet(&mut self, request: &BatchRequest) -> &Accumulator {
        info!(
            "Generating {} records ({} categories)",
            request.record_count,
            request.categories().count()
        );

        for category in request.categories() {
            for _ in 0..request.record_count {
                self.generate(category);
            }
            debug!("Generated {} {:?} values", request.record_count, category);
        }

        &self.data
    }

    /// Values generated so far.
    pub fn data(&self) -> &Accumulator {
        &self.data
    }

    /// Hand off the generated values, leaving the generator empty.
    pub fn take_data(&mut self) -> Accumulator {
        std::mem::take(&mut self.data)
    }

    /// Discard all generated values.
    pub fn reset(&mut self) {
        self.data.clear();
    }
}
