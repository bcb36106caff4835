use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use showbill::{datasets::Event, Connection as _, Dataset, Model, SharedConnection};
use tests::{connect, exec_sql};

async fn event_model() -> (Model<Event>, SharedConnection) {
    let connection = connect(&[Event::schema()]).await;
    let model = Model::<Event>::shared(connection.clone()).unwrap();
    (model, connection)
}

#[tokio::test]
async fn returns_an_empty_vec_for_an_empty_table() {
    let (model, _connection) = event_model().await;

    let datasets = model.get_datasets().await.unwrap();
    assert!(datasets.is_empty());
}

#[tokio::test]
async fn returns_one_dataset_for_one_upcoming_event() {
    let (model, connection) = event_model().await;

    exec_sql(
        &connection,
        "INSERT INTO event (date_start, name, url) \
         VALUES ('2035-03-03', 'Darkness-Fest', 'https://www.ruhrpottmetaller.de')",
    )
    .await
    .unwrap();

    let datasets = model.get_datasets().await.unwrap();
    assert_eq!(datasets.len(), 1);
    assert_eq!(datasets[0].url(), Some("https://www.ruhrpottmetaller.de"));
    assert_eq!(datasets[0].id(), Some(1));
    assert_eq!(datasets[0].name(), Some("Darkness-Fest"));
    assert_eq!(
        datasets[0].date_start(),
        NaiveDate::from_ymd_opt(2035, 3, 3)
    );
}

#[tokio::test]
async fn returns_two_datasets_in_insertion_order() {
    let (model, connection) = event_model().await;

    // Equal dates: the stable sort keeps insertion order
    exec_sql(
        &connection,
        "INSERT INTO event (date_start, url) \
         VALUES (date('now', '+1 day'), 'https://www.beerfest.de')",
    )
    .await
    .unwrap();
    exec_sql(
        &connection,
        "INSERT INTO event (date_start, url) \
         VALUES (date('now', '+1 day'), 'https://www.ruhrpottmetaller.de')",
    )
    .await
    .unwrap();

    let datasets = model.get_datasets().await.unwrap();
    assert_eq!(datasets.len(), 2);
    assert_eq!(datasets[0].url(), Some("https://www.beerfest.de"));
    assert_eq!(datasets[1].url(), Some("https://www.ruhrpottmetaller.de"));
    assert_eq!(datasets[1].id(), Some(2));
}

#[tokio::test]
async fn sorts_datasets_by_date() {
    let (model, connection) = event_model().await;

    exec_sql(
        &connection,
        "INSERT INTO event (date_start, url) VALUES ('2032-07-22', 'https://www.beerfest.de')",
    )
    .await
    .unwrap();
    exec_sql(
        &connection,
        "INSERT INTO event (date_start, url) \
         VALUES ('2032-06-22', 'https://www.ruhrpottmetaller.de')",
    )
    .await
    .unwrap();

    let datasets = model.get_datasets().await.unwrap();
    assert_eq!(datasets[0].url(), Some("https://www.ruhrpottmetaller.de"));
    assert_eq!(datasets[1].url(), Some("https://www.beerfest.de"));
}

#[tokio::test]
async fn ignores_datasets_in_the_past() {
    let (model, connection) = event_model().await;

    exec_sql(
        &connection,
        "INSERT INTO event (date_start, url) VALUES ('2012-07-22', 'https://www.beerfest.de')",
    )
    .await
    .unwrap();
    exec_sql(
        &connection,
        "INSERT INTO event (date_start, url) \
         VALUES ('2032-06-22', 'https://www.ruhrpottmetaller.de')",
    )
    .await
    .unwrap();

    let datasets = model.get_datasets().await.unwrap();
    assert_eq!(datasets.len(), 1);
    assert_eq!(datasets[0].url(), Some("https://www.ruhrpottmetaller.de"));
}

#[tokio::test]
async fn ignores_datasets_starting_today() {
    let (model, connection) = event_model().await;

    exec_sql(
        &connection,
        "INSERT INTO event (date_start, url) \
         VALUES (date('now'), 'https://www.ruhrpottmetaller.de')",
    )
    .await
    .unwrap();

    let datasets = model.get_datasets().await.unwrap();
    assert!(datasets.is_empty());
}

#[tokio::test]
async fn hydration_round_trips_every_column() {
    let (model, connection) = event_model().await;

    exec_sql(
        &connection,
        "INSERT INTO event (name, date_start, number_of_days, venue_id, url, sold_out) \
         VALUES ('Darkness-Fest', '2035-03-03', 3, 7, 'https://www.ruhrpottmetaller.de', 1)",
    )
    .await
    .unwrap();

    let datasets = model.get_datasets().await.unwrap();
    assert_eq!(datasets.len(), 1);

    let event = &datasets[0];
    assert_eq!(event.id(), Some(1));
    assert_eq!(event.name(), Some("Darkness-Fest"));
    assert_eq!(event.date_start(), NaiveDate::from_ymd_opt(2035, 3, 3));
    assert_eq!(event.number_of_days(), Some(3));
    assert_eq!(event.venue_id(), Some(7));
    assert_eq!(event.url(), Some("https://www.ruhrpottmetaller.de"));
    assert_eq!(event.sold_out(), Some(true));
}

#[tokio::test]
async fn unset_columns_read_as_none() {
    let (model, connection) = event_model().await;

    exec_sql(
        &connection,
        "INSERT INTO event (date_start) VALUES ('2035-03-03')",
    )
    .await
    .unwrap();

    let datasets = model.get_datasets().await.unwrap();
    assert_eq!(datasets.len(), 1);
    assert_eq!(datasets[0].name(), None);
    assert_eq!(datasets[0].sold_out(), None);
    assert!(datasets[0].url_variable().value().is_null());
}

#[tokio::test]
async fn connection_lifecycle_stays_with_the_caller() {
    let (model, connection) = event_model().await;

    model.get_datasets().await.unwrap();

    // The model never closes the connection; the caller does
    connection.lock().await.close().await.unwrap();
}
