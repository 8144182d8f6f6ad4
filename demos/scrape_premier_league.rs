use football_data_scraper::FootballDataClient;

#[tokio::main]
async fn main() {
    let client = FootballDataClient::connect("england", "Premier League")
        .await
        .unwrap();

    let merged = client.get_seasons(2019, 2021).await.unwrap();
    println!(
        "{} matches across three seasons ({} columns, {} malformed rows skipped)",
        merged.len(),
        merged.columns().len(),
        merged.rows_dropped()
    );

    let arsenal = client.get_club_matches("Arsenal", 2021, None).await.unwrap();
    serde_json::to_writer_pretty(
        std::fs::File::create("arsenal_2021.json").unwrap(),
        &arsenal,
    )
    .unwrap();
    println!("Wrote {} Arsenal matches to arsenal_2021.json", arsenal.len());

    let (results, statistics) = FootballDataClient::get_notes();
    println!("\nResult columns:");
    for note in results {
        println!("  {} = {}", note.name, note.explanation);
    }
    println!("\nStatistics columns:");
    for note in statistics {
        println!("  {} = {}", note.name, note.explanation);
    }
}
