//! Deterministic synthetic corpus for latency runs
//!
//! Builds a review document, an issue list sampled from that document, and
//! an assistant response with numbered points and URLs. Generation is a
//! pure function of `CorpusConfig`, so runs are reproducible across
//! machines and commits.

use shared_types::{Issue, ReviewDocument};

use crate::config::CorpusConfig;

/// A generated corpus: everything one run measures against
#[derive(Debug, Clone)]
pub struct Corpus {
    pub document: ReviewDocument,
    pub issues: Vec<Issue>,
    pub response: String,
}

const WORD_BANK: &[&str] = &[
    "tenant",
    "landlord",
    "lease",
    "deposit",
    "notice",
    "termination",
    "premises",
    "statute",
    "provision",
    "waiver",
    "liability",
    "maintenance",
    "disclosure",
    "payment",
    "penalty",
    "renewal",
    "inspection",
    "compliance",
    "remedy",
    "clause",
    "obligation",
    "assignment",
    "sublease",
    "arbitration",
];

const DOMAIN_BANK: &[&str] = &[
    "flsenate.gov",
    "www.hud.gov",
    "law.cornell.edu",
    "municode.example.com",
];

const WORDS_PER_LINE: usize = 12;

/// Splitmix-style generator; good enough to scatter issue positions
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed.wrapping_add(0x9e3779b97f4a7c15))
    }

    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound.max(1) as u64) as usize
    }
}

/// Build the full corpus for one run
pub fn build_corpus(config: &CorpusConfig) -> Corpus {
    let mut rng = Rng::new(config.seed);
    let words = document_words(config, &mut rng);
    let document = assemble_document(&words);
    let issues = sample_issues(config, &words, &mut rng);
    let response = build_response(config, &mut rng);

    Corpus {
        document,
        issues,
        response,
    }
}

fn document_words(config: &CorpusConfig, rng: &mut Rng) -> Vec<&'static str> {
    (0..config.document_words)
        .map(|_| WORD_BANK[rng.below(WORD_BANK.len())])
        .collect()
}

/// Join words into lines so line wraps land between snippet words, the way
/// a rich-text editor reflows a real document
fn assemble_document(words: &[&str]) -> ReviewDocument {
    let lines: Vec<String> = words
        .chunks(WORDS_PER_LINE)
        .map(|chunk| chunk.join(" "))
        .collect();

    ReviewDocument {
        id: "bench-doc".to_string(),
        title: "Synthetic lease under review".to_string(),
        plain_text: lines.join("\n"),
        updated_at: 0,
    }
}

/// Sample issue snippets from the document's own word sequence so the
/// matcher always has work to do; some carry markup, some are resolved
fn sample_issues(config: &CorpusConfig, words: &[&str], rng: &mut Rng) -> Vec<Issue> {
    let mut issues = Vec::with_capacity(config.issue_count);

    for k in 0..config.issue_count {
        let len = 3 + rng.below(4);
        let start = rng.below(words.len().saturating_sub(len).max(1));
        let snippet = words[start..(start + len).min(words.len())].join(" ");

        let original_text = if k % 3 == 2 {
            format!("<em>{}</em>", snippet)
        } else {
            snippet
        };

        issues.push(Issue {
            id: format!("iss-{}", k),
            original_text,
            resolved: k % 4 == 3,
        });
    }

    issues
}

fn build_response(config: &CorpusConfig, rng: &mut Rng) -> String {
    let mut response = String::from("Relevant authority for the flagged clauses: ");

    for point in 0..config.response_points {
        let word = WORD_BANK[rng.below(WORD_BANK.len())];
        response.push_str(&format!(
            "{}. \"{} requirements under chapter 83\"; ",
            point + 1,
            word
        ));
    }

    for url in 0..config.response_urls {
        let domain = DOMAIN_BANK[rng.below(DOMAIN_BANK.len())];
        response.push_str(&format!("see https://{}/statutes/{} ", domain, url));
    }

    response
}
