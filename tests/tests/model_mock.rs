use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use showbill::{datasets::Event, stmt::Value, Model};
use showbill_core::{driver::Operation, stmt::Row};
use tests::mock::MockConnection;

fn event_row(date_start: &str, url: &str) -> Row {
    [
        ("date_start", Value::from(date_start)),
        ("url", Value::from(url)),
    ]
    .into_iter()
    .collect()
}

#[tokio::test]
async fn driver_errors_propagate_unchanged() {
    let model = Model::<Event>::new(Box::new(MockConnection::failing("connection refused")))
        .unwrap();

    let err = model.get_datasets().await.unwrap_err();
    assert!(err.is_driver());
    assert!(err.to_string().contains("connection refused"));
}

#[tokio::test]
async fn a_count_response_is_an_invalid_result() {
    let model = Model::<Event>::new(Box::new(MockConnection::with_count(3))).unwrap();

    let err = model.get_datasets().await.unwrap_err();
    assert!(err.is_invalid_result());
}

#[tokio::test]
async fn issues_exactly_one_query_with_the_declared_columns() {
    let mock = MockConnection::with_rows(vec![]);
    let log = mock.log_handle();
    let model = Model::<Event>::new(Box::new(mock)).unwrap();

    model.get_datasets().await.unwrap();

    let ops = log.lock().unwrap();
    assert_eq!(ops.len(), 1);

    let Operation::QuerySql(op) = &ops[0] else {
        panic!("expected a QuerySql operation, got {:?}", ops[0]);
    };
    assert_eq!(op.stmt.table, "event");
    assert_eq!(
        op.stmt.columns,
        [
            "id",
            "name",
            "date_start",
            "number_of_days",
            "venue_id",
            "url",
            "sold_out"
        ]
    );
}

#[tokio::test]
async fn filters_and_sorts_scripted_rows() {
    let rows = vec![
        event_row("2012-07-22", "https://www.past.example"),
        event_row("2036-01-01", "https://www.later.example"),
        event_row("2035-03-03", "https://www.sooner.example"),
    ];
    let model = Model::<Event>::new(Box::new(MockConnection::with_rows(rows))).unwrap();

    let datasets = model.get_datasets().await.unwrap();
    assert_eq!(datasets.len(), 2);
    assert_eq!(datasets[0].url(), Some("https://www.sooner.example"));
    assert_eq!(
        datasets[0].date_start(),
        NaiveDate::from_ymd_opt(2035, 3, 3)
    );
    assert_eq!(datasets[1].url(), Some("https://www.later.example"));
}

#[tokio::test]
async fn rows_with_a_null_date_are_excluded() {
    let rows = vec![
        event_row("2035-03-03", "https://www.dated.example"),
        [("url", Value::from("https://www.undated.example"))]
            .into_iter()
            .collect(),
    ];
    let model = Model::<Event>::new(Box::new(MockConnection::with_rows(rows))).unwrap();

    let datasets = model.get_datasets().await.unwrap();
    assert_eq!(datasets.len(), 1);
    assert_eq!(datasets[0].url(), Some("https://www.dated.example"));
}
