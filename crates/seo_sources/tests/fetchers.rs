use seo_core::{Endpoints, ResearchConfig, SourceFetcher};
use seo_sources::{PubMedFetcher, RedditFetcher, SerpFetcher, WikipediaFetcher};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ResearchConfig {
    ResearchConfig::default().with_endpoints(Endpoints::all(&server.uri()))
}

#[tokio::test]
async fn test_wikipedia_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Zinc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Zinc",
            "extract": "Zinc is a chemical element. It has symbol Zn."
        })))
        .mount(&server)
        .await;

    let fetcher = WikipediaFetcher::new(&config_for(&server)).unwrap();
    assert_eq!(
        fetcher.fetch("zinc").await,
        vec!["Zinc is a chemical element.", "It has symbol Zn."]
    );
}

#[tokio::test]
async fn test_wikipedia_404_falls_back_to_opensearch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Zinc_absorption"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "opensearch"))
        .and(query_param("search", "zinc absorption"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            "zinc absorption",
            ["Zinc", "Zinc deficiency", "Phytic acid", "Zinc transporter"],
            ["Chemical element", "Lack of zinc", "Antinutrient", "Membrane protein"],
            []
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = WikipediaFetcher::new(&config_for(&server)).unwrap();
    assert_eq!(
        fetcher.fetch("zinc absorption").await,
        vec!["Chemical element", "Lack of zinc", "Antinutrient"]
    );
}

#[tokio::test]
async fn test_wikipedia_both_endpoints_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = WikipediaFetcher::new(&config_for(&server)).unwrap();
    assert!(!fetcher.settle("zinc").await.is_success());
    assert!(fetcher.fetch("zinc").await.is_empty());
}

#[tokio::test]
async fn test_reddit_excludes_short_posts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "zinc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "children": [
                { "data": { "title": "Too short", "selftext": "a".repeat(40), "subreddit": "Supplements" } },
                { "data": { "title": "Zinc and colds", "selftext": "b".repeat(120), "subreddit": "Supplements" } }
            ] }
        })))
        .mount(&server)
        .await;

    let insights = RedditFetcher::new(&config_for(&server)).unwrap().fetch("zinc").await;
    assert_eq!(insights.len(), 1);
    assert!(insights[0].starts_with("Zinc and colds: "));
}

#[tokio::test]
async fn test_reddit_malformed_json_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let fetcher = RedditFetcher::new(&config_for(&server)).unwrap();
    assert!(fetcher.fetch("zinc").await.is_empty());
}

#[tokio::test]
async fn test_pubmed_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entrez/eutils/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("retmode", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "esearchresult": { "count": "2", "idlist": ["38012345", "37999999"] }
        })))
        .mount(&server)
        .await;

    let studies = PubMedFetcher::new(&config_for(&server)).unwrap().fetch("zinc").await;
    assert_eq!(
        studies,
        vec![
            "PubMed study PMID 38012345: https://pubmed.ncbi.nlm.nih.gov/38012345/",
            "PubMed study PMID 37999999: https://pubmed.ncbi.nlm.nih.gov/37999999/",
        ]
    );
}

#[tokio::test]
async fn test_serp_html_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html/"))
        .and(query_param("q", "zinc"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<div class="result"><a class="result__a" href="https://www.mayoclinic.org/zinc">Zinc - Mayo Clinic</a>
               <a class="result__snippet">Zinc lozenges shortened colds by 33% in trials.</a></div>"#,
        ))
        .mount(&server)
        .await;

    let serp = SerpFetcher::new(&config_for(&server)).unwrap().fetch("zinc").await;
    assert_eq!(serp.results.len(), 1);
    assert_eq!(serp.urls(), vec!["https://www.mayoclinic.org/zinc".to_string()]);
    assert_eq!(serp.statistics, vec!["33%".to_string()]);
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = config_for(&server).with_timeout(std::time::Duration::from_millis(200));
    let fetcher = PubMedFetcher::new(&config).unwrap();
    assert!(fetcher.fetch("zinc").await.is_empty());
}
