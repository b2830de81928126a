use interavoice::domain::{FaqCollection, FaqEntry};

#[test]
fn given_entry_without_question_when_deserializing_then_question_is_empty() {
    let entry: FaqEntry = serde_json::from_str(r#"{"answer": "Contact sales."}"#).unwrap();

    assert_eq!(entry.question, "");
    assert_eq!(entry.answer, "Contact sales.");
}

#[test]
fn given_empty_object_when_deserializing_then_both_fields_are_empty() {
    let entry: FaqEntry = serde_json::from_str("{}").unwrap();

    assert_eq!(entry, FaqEntry::default());
}

#[test]
fn given_entries_when_building_collection_then_order_is_preserved() {
    let collection: FaqCollection = vec![
        FaqEntry::new("first", "1"),
        FaqEntry::new("second", "2"),
        FaqEntry::new("first", "3"),
    ]
    .into_iter()
    .collect();

    let answers: Vec<&str> = collection.iter().map(|e| e.answer.as_str()).collect();
    assert_eq!(answers, vec!["1", "2", "3"]);
    assert_eq!(collection.len(), 3);
}

#[test]
fn given_empty_collection_when_inspecting_then_reports_empty() {
    let collection = FaqCollection::empty();

    assert!(collection.is_empty());
    assert!(collection.entries().is_empty());
}
