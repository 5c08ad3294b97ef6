//! Name and job title providers.

use crate::error::GeneratorError;
use crate::generators::pick;
use fake::faker::job::en::Title;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;

/// Source of locale-appropriate given names, family names and job titles.
///
/// Implementations draw from the generator's RNG so that seeded generators
/// stay reproducible.
pub trait Corpus {
    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    fn job_title<R: Rng + ?Sized>(&self, rng: &mut R) -> String;
}

/// Corpus backed by the `fake` crate's generic English (`en`) locale.
///
/// `fake` has no Canadian locale, so names and job titles are not
/// specific to `en_CA`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakerCorpus;

impl Corpus for FakerCorpus {
    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        FirstName().fake_with_rng(rng)
    }

    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        LastName().fake_with_rng(rng)
    }

    fn job_title<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        Title().fake_with_rng(rng)
    }
}

/// Corpus sampling uniformly from caller-supplied lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCorpus {
    first_names: Vec<String>,
    last_names: Vec<String>,
    job_titles: Vec<String>,
}

impl ListCorpus {
    pub fn new(
        first_names: Vec<String>,
        last_names: Vec<String>,
        job_titles: Vec<String>,
    ) -> Result<Self, GeneratorError> {
        if first_names.is_empty() {
            return Err(GeneratorError::EmptyReferenceList("first names"));
        }
        if last_names.is_empty() {
            return Err(GeneratorError::EmptyReferenceList("last names"));
        }
        if job_titles.is_empty() {
            return Err(GeneratorError::EmptyReferenceList("job titles"));
        }
        Ok(Self {
            first_names,
            last_names,
            job_titles,
        })
    }
}

impl Corpus for ListCorpus {
    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick(rng, &self.first_names).clone()
    }

    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick(rng, &self.last_names).clone()
    }

    fn job_title<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick(rng, &self.job_titles).clone()
    }
}
