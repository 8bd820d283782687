use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::analysis::{AnalysisReport, TopicAnalysis};
use crate::error::Result;
use crate::topic_modeling::Topic;

/// Writes the topic table, outlier included, as
/// `Topic,Count,Name,Representation,Representative_Docs`.
pub fn write_topic_info<W: Write>(writer: W, topics: &[Topic]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Topic", "Count", "Name", "Representation", "Representative_Docs"])?;
    for topic in topics {
        let words: Vec<&str> = topic.keywords.iter().map(|(w, _)| w.as_str()).collect();
        csv_writer.write_record([
            topic.id.to_string(),
            topic.count.to_string(),
            topic.name.clone(),
            serde_json::to_string(&words)?,
            serde_json::to_string(&topic.representative_docs)?,
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_topic_info_file(path: &Path, topics: &[Topic]) -> Result<()> {
    write_topic_info(BufWriter::new(File::create(path)?), topics)
}

pub fn write_json_report(path: &Path, report: &AnalysisReport) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_topics(analysis: &TopicAnalysis) {
    println!("{:>6}  {:>6}  {}", "Topic", "Count", "Name");
    for topic in &analysis.topic_info {
        println!("{:>6}  {:>6}  {}", topic.id, topic.count, topic.name);
    }

    println!("\nTop Keywords per Topic");
    for summary in &analysis.summaries {
        println!("  Topic {} ({}): {}", summary.topic_id, summary.name, summary.keyword_line());
    }

    println!("\nRepresentative Responses");
    for summary in &analysis.summaries {
        println!("  Topic {}: {}", summary.topic_id, summary.representative_text());
    }
}

impl AnalysisReport {
    pub fn print_summary(&self) {
        println!("\n=== Overall Topic Summary (All Responses Combined) ===");
        println!("Respondents: {}\n", self.respondents);
        print_topics(&self.overall);

        println!("\nTopic Distribution");
        for share in &self.overall.distribution {
            println!("  Topic {:>3}: {:>5.1}%", share.topic_id, share.share * 100.0);
        }
    }

    pub fn print_per_question(&self) {
        for question in &self.per_question {
            println!("\n=== Topics for: {} ===", question.column);
            match (&question.topics, &question.error) {
                (Some(topics), _) => print_topics(topics),
                (None, Some(error)) => println!("  Skipped: {}", error),
                (None, None) => println!("  No topics."),
            }
        }
    }

    pub fn print_frequencies(&self) {
        println!("\n=== Phrase Frequencies in '{}' ===", self.likert_column);
        for entry in &self.phrase_counts {
            println!("  {}: {} occurrence(s)", title_case(&entry.phrase), entry.count);
        }

        println!("\n=== Top {} Words in Combined Responses ===", self.top_words.len());
        for (word, count) in &self.top_words {
            println!("  {:<20} {}", word, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_info_csv() {
        let topics = vec![
            Topic {
                id: -1,
                count: 4,
                name: "-1_".into(),
                keywords: vec![],
                representative_docs: vec![],
            },
            Topic {
                id: 0,
                count: 6,
                name: "0_hope_fear".into(),
                keywords: vec![("hope".into(), 0.5), ("fear".into(), 0.25)],
                representative_docs: vec!["Hope, \"always\"".into()],
            },
        ];
        let mut out = Vec::new();
        write_topic_info(&mut out, &topics).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let headers: Vec<&str> = reader.headers().unwrap().iter().collect();
        assert_eq!(
            headers,
            vec!["Topic", "Count", "Name", "Representation", "Representative_Docs"]
        );
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "-1");
        assert_eq!(&rows[1][2], "0_hope_fear");
        assert_eq!(&rows[1][3], r#"["hope","fear"]"#);
        let docs: Vec<String> = serde_json::from_str(&rows[1][4]).unwrap();
        assert_eq!(docs, vec!["Hope, \"always\"".to_string()]);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("deeply moved"), "Deeply Moved");
        assert_eq!(title_case("not at all"), "Not At All");
    }
}
