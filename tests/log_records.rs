use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

use bayes_text::classifier::NaiveBayesClassifier;

struct CaptureLogger {
    records: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !record.target().starts_with("bayes_text") {
            return;
        }
        if let Ok(mut records) = self.records.lock() {
            records.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_records_name_categories_plainly() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut classifier = NaiveBayesClassifier::new(["spam", "ham"]).unwrap();
    classifier.train("free money now", "spam").unwrap();
    classifier.train("meeting agenda", "ham").unwrap();
    classifier.classify("free money").unwrap();
    classifier.cleanup(0.5).unwrap();

    let records = LOGGER.records.lock().unwrap().clone();

    assert!(records.contains(&"created classifier for categories [spam, ham]".to_string()));
    assert!(records.contains(&"trained document with 2 distinct tokens as spam".to_string()));
    assert!(records.contains(&"trained document with 2 distinct tokens as ham".to_string()));
    assert!(records.iter().any(|r| r.starts_with("category spam scored ")));
    assert!(records.iter().any(|r| r.starts_with("classified 2 tokens as spam")));
    assert!(records.contains(&"cleanup removed 4 words".to_string()));
    assert!(records.iter().all(|r| !r.contains("Some(")));
}
