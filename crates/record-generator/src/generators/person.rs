//! Person name and job title generators.

use super::pick;
use crate::corpus::Corpus;
use rand::Rng;

const NAME_SEPARATORS: [&str; 2] = [", ", ","];

/// A given and family name pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

/// Draw a first and last name from the corpus.
pub fn generate_person_name<R: Rng + ?Sized, C: Corpus>(rng: &mut R, corpus: &C) -> PersonName {
    let first = corpus.first_name(rng);
    let last = corpus.last_name(rng);
    PersonName { first, last }
}

/// Render as `Last, First` or `Last,First`.
pub fn format_last_first<R: Rng + ?Sized>(rng: &mut R, name: &PersonName) -> String {
    let separator = pick(rng, &NAME_SEPARATORS);
    format!("{}{separator}{}", name.last, name.first)
}

pub fn generate_job_title<R: Rng + ?Sized, C: Corpus>(rng: &mut R, corpus: &C) -> String {
    corpus.job_title(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::ListCorpus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn corpus() -> ListCorpus {
        ListCorpus::new(
            vec!["Emily".to_string()],
            vec!["Tremblay".to_string()],
            vec!["Surveyor".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_generate_person_name() {
        let mut rng = StdRng::seed_from_u64(42);
        let name = generate_person_name(&mut rng, &corpus());

        assert_eq!(name.first, "Emily");
        assert_eq!(name.last, "Tremblay");
    }

    #[test]
    fn test_format_last_first_separators() {
        let mut rng = StdRng::seed_from_u64(42);
        let name = generate_person_name(&mut rng, &corpus());
        let mut seen_spaced = false;
        let mut seen_tight = false;

        for _ in 0..100 {
            match format_last_first(&mut rng, &name).as_str() {
                "Tremblay, Emily" => seen_spaced = true,
                "Tremblay,Emily" => seen_tight = true,
                other => panic!("unexpected name format {other}"),
            }
        }

        assert!(seen_spaced && seen_tight);
    }

    #[test]
    fn test_generate_job_title() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_job_title(&mut rng, &corpus()), "Surveyor");
    }
}
