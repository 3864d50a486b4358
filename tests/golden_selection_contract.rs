use chrono::NaiveDate;
use docutrack_core::corpus::Corpus;
use docutrack_core::selection::{DocumentSelector, FixedClock, Recency, SelectionConfig};
use docutrack_core::types::{SelectionResult, SelectionStrategy};

const CORPUS_JSON: &str = r#"[
  { "date": "2023-01-15", "code": "A1", "docNumber": "DOC-001", "pdfName": "documento_1.pdf" },
  { "date": "2023-02-10", "code": "A2, A3", "docNumber": "DOC-002", "pdfName": "documento_2.pdf" },
  { "date": "2023-01-20", "code": "A3, A1", "docNumber": "DOC-003", "pdfName": "documento_3.pdf" }
]"#;

fn select() -> SelectionResult {
    let corpus = Corpus::from_json_reader(CORPUS_JSON.as_bytes()).unwrap();
    let selector = DocumentSelector::new(
        FixedClock(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()),
        SelectionConfig::v0(),
    );
    selector
        .select(&["A1", "A2", "A3", "B9"], corpus.documents(), &Recency::Days(30))
        .unwrap()
}

#[test]
fn golden_greedy_selection_output() {
    let result = select();
    assert_eq!(result.selection.strategy, SelectionStrategy::Greedy);

    let json_str = serde_json::to_string_pretty(&result).unwrap();

    let doc_start = json_str.find("\"documents\":").expect("Missing documents key");
    let unc_start = json_str.find("\"uncovered_codes\":").expect("Missing uncovered_codes key");
    let sel_start = json_str.find("\"selection\":").expect("Missing selection key");
    assert!(doc_start < unc_start);
    assert!(unc_start < sel_start);

    const EXPECTED_JSON: &str = r#"{
      "documents": [
        {
          "document": {
            "id": "2",
            "issued_on": "2023-02-10",
            "codes": ["A2", "A3"],
            "payload": {
              "doc_number": "DOC-002",
              "file_name": "documento_2.pdf"
            }
          },
          "why": {
            "matched_codes": ["A2", "A3"],
            "newly_covered": ["A2", "A3"],
            "pick": 1
          }
        },
        {
          "document": {
            "id": "3",
            "issued_on": "2023-01-20",
            "codes": ["A1", "A3"],
            "payload": {
              "doc_number": "DOC-003",
              "file_name": "documento_3.pdf"
            }
          },
          "why": {
            "matched_codes": ["A1", "A3"],
            "newly_covered": ["A1"],
            "pick": 2
          }
        }
      ],
      "uncovered_codes": ["B9"],
      "selection": {
        "requested_codes": ["A1", "A2", "A3", "B9"],
        "strategy": "greedy",
        "reference_date": "2023-03-01",
        "recency_threshold": "2023-01-30",
        "documents_considered": 3,
        "recent_documents": 1,
        "documents_selected": 2,
        "greedy_rounds": 2
      }
    }"#;

    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String = EXPECTED_JSON.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(normalized_actual, normalized_expected, "JSON structure mismatch against golden snapshot");

    let deserialized: SelectionResult = serde_json::from_str(&json_str).expect("Deserialization failed");
    assert_eq!(deserialized, result);
}

#[test]
fn golden_full_cover_output() {
    let corpus = Corpus::from_json_reader(CORPUS_JSON.as_bytes()).unwrap();
    let selector = DocumentSelector::new(
        FixedClock(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()),
        SelectionConfig::v0(),
    );
    let recency = Recency::predicate(|_| false);

    let result = selector.select(&["A3"], corpus.documents(), &recency).unwrap();
    let json_str = serde_json::to_string(&result).unwrap();

    let expected = concat!(
        r#"{"documents":[{"document":{"id":"2","issued_on":"2023-02-10","codes":["A2","A3"],"#,
        r#""payload":{"doc_number":"DOC-002","file_name":"documento_2.pdf"}},"#,
        r#""why":{"matched_codes":["A3"],"newly_covered":["A3"],"pick":1}}],"#,
        r#""uncovered_codes":[],"#,
        r#""selection":{"requested_codes":["A3"],"strategy":"global_full_cover","#,
        r#""reference_date":"2023-03-01","recency_threshold":null,"#,
        r#""documents_considered":3,"recent_documents":0,"documents_selected":1,"greedy_rounds":0}}"#,
    );

    assert_eq!(json_str, expected, "Golden snapshot mismatch");
}
