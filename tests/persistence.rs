use rental_tracker::{
    close_database, create_rental, delete_rental, fetch_rentals, open_database, App, AppConfig,
};

#[test]
fn rentals_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::in_dir(dir.path().join("data"));

    let conn = open_database(&config.db_path).unwrap();
    create_rental(&conn, "Ana", "01/01/2024", "10/01/2024").unwrap();
    create_rental(&conn, "Bruno", "02/01/2024", "12/01/2024").unwrap();
    close_database(conn).unwrap();

    let conn = open_database(&config.db_path).unwrap();
    let rentals = fetch_rentals(&conn).unwrap();
    let ids: Vec<_> = rentals.iter().map(|rental| rental.id).collect();
    assert_eq!(ids, [1, 2]);
    assert_eq!(rentals[0].display_line(), "Ana - 01/01/2024 até 10/01/2024");
}

#[test]
fn reopening_does_not_recreate_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rentals.db");

    for _ in 0..3 {
        let conn = open_database(&path).unwrap();
        create_rental(&conn, "Ana", "a", "b").unwrap();
        close_database(conn).unwrap();
    }

    let conn = open_database(&path).unwrap();
    assert_eq!(fetch_rentals(&conn).unwrap().len(), 3);
}

#[test]
fn deleted_ids_stay_retired_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rentals.db");

    let conn = open_database(&path).unwrap();
    let first = create_rental(&conn, "Ana", "a", "b").unwrap();
    delete_rental(&conn, first.id).unwrap();
    delete_rental(&conn, 999).unwrap();
    close_database(conn).unwrap();

    let conn = open_database(&path).unwrap();
    let second = create_rental(&conn, "Bruno", "a", "b").unwrap();
    assert_eq!(second.id, 2);
    assert_eq!(fetch_rentals(&conn).unwrap(), vec![second]);
}

#[test]
fn app_hands_back_the_connection_it_was_given() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rentals.db");
    let conn = open_database(&path).unwrap();
    create_rental(&conn, "Ana", "a", "b").unwrap();

    let app = App::new(conn).unwrap();
    let conn = app.into_connection();

    assert_eq!(fetch_rentals(&conn).unwrap().len(), 1);
    close_database(conn).unwrap();
}
