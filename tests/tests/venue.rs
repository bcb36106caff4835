use pretty_assertions::assert_eq;
use showbill::{
    datasets::{Event, Venue},
    Dataset, Model,
};
use tests::{connect, exec_sql};

#[tokio::test]
async fn venues_pass_through_unfiltered_in_query_order() {
    let connection = connect(&[Venue::schema()]).await;
    let model = Model::<Venue>::shared(connection.clone()).unwrap();

    exec_sql(
        &connection,
        "INSERT INTO venue (name, city) VALUES ('Turock', 'Essen')",
    )
    .await
    .unwrap();
    exec_sql(
        &connection,
        "INSERT INTO venue (name, city) VALUES ('Kulttempel', 'Oberhausen')",
    )
    .await
    .unwrap();

    let venues = model.get_datasets().await.unwrap();
    assert_eq!(venues.len(), 2);
    assert_eq!(venues[0].name(), Some("Turock"));
    assert_eq!(venues[0].city(), Some("Essen"));
    assert_eq!(venues[1].name(), Some("Kulttempel"));
    assert_eq!(venues[1].id(), Some(2));
}

#[tokio::test]
async fn two_models_share_one_connection() {
    let connection = connect(&[Event::schema(), Venue::schema()]).await;

    let events = Model::<Event>::shared(connection.clone()).unwrap();
    let venues = Model::<Venue>::shared(connection.clone()).unwrap();

    exec_sql(
        &connection,
        "INSERT INTO venue (name, city) VALUES ('Turock', 'Essen')",
    )
    .await
    .unwrap();

    assert!(events.get_datasets().await.unwrap().is_empty());
    assert_eq!(venues.get_datasets().await.unwrap().len(), 1);
}
