use concerts_is::{ConcertClient, ConcertView};

#[tokio::main]
async fn main() {
    let query = std::env::args().nth(1).unwrap_or_default();

    let client = ConcertClient::new();
    let mut view = ConcertView::new();
    view.refresh(&client).await;

    if let Some(error) = view.error() {
        eprintln!("Could not load concerts: {error}");
        std::process::exit(1);
    }

    view.set_query(query);
    let visible = view.visible();
    println!(
        "Showing {} of {} concerts",
        visible.len(),
        view.concerts().len()
    );
    for concert in visible {
        println!("{}", concert.title());
        if let Some(date) = concert.display_date() {
            println!("  📅 {date}");
        }
        if let Some(hall) = &concert.event_hall_name {
            println!("  📍 {hall}");
        }
    }
}
