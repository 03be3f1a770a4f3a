use qbreader_client::{QbError, QbReaderClient};
use qbreader_core::{Category, Difficulty, QuestionType};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tossup_json(number: u32, question: &str) -> Value {
    json!({
        "_id": format!("t{number}"),
        "question": question,
        "answer": "answer",
        "formatted_answer": "<b>answer</b>",
        "category": "Science",
        "subcategory": "Physics",
        "packet_number": 2,
        "question_number": number,
        "difficulty": 3,
        "set_name": "2023 Example Set"
    })
}

fn bonus_json(number: u32) -> Value {
    json!({
        "_id": format!("b{number}"),
        "leadin": format!("bonus {number}"),
        "parts": ["p1", "p2", "p3"],
        "answers": ["a1", "a2", "a3"],
        "formatted_answers": ["f1", "f2", "f3"],
        "category": "History",
        "subcategory": "European History",
        "packet_number": 2,
        "question_number": number,
        "difficulty": 3,
        "set_name": "2023 Example Set"
    })
}

async fn setup() -> (MockServer, QbReaderClient) {
    let server = MockServer::start().await;
    let client = QbReaderClient::builder()
        .base_url(format!("{}/api", server.uri()))
        .build()
        .unwrap();
    (server, client)
}

#[tokio::test]
async fn test_packet_is_sorted_and_paired() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/packet"))
        .and(query_param("setName", "2023 Example Set"))
        .and(query_param("packetNumber", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tossups": [
                tossup_json(3, "third (*) tossup"),
                tossup_json(1, "first tossup"),
                tossup_json(2, "second tossup"),
            ],
            "bonuses": [bonus_json(2), bonus_json(1)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let packet = assert_ok!(client.packets().packet("2023 Example Set", 2).await);

    assert_eq!(packet.packet_number(), 2);
    assert_eq!(packet.set_name(), "2023 Example Set");
    assert_eq!(packet.difficulty(), Difficulty::HsRegular);

    let numbers: Vec<_> = packet.tossups().iter().map(|t| t.question_number()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert!(packet.tossups()[2].powerable());
    assert!(!packet.tossups()[0].powerable());

    let pairs: Vec<_> = packet
        .iter()
        .map(|(t, b)| (t.question_number(), b.question_number()))
        .collect();
    assert_eq!(pairs, vec![(1, 1), (2, 2)]);
    assert_eq!(packet.bonuses()[0].parts().len(), 3);
}

#[tokio::test]
async fn test_packet_tossups_only() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/packet-tossups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tossups": [tossup_json(2, "b"), tossup_json(1, "a")]
        })))
        .mount(&server)
        .await;

    let tossups = assert_ok!(client.packets().tossups("2023 Example Set", 2).await);
    assert_eq!(tossups.len(), 2);
    assert_eq!(tossups[0].question(), "a");
    assert_eq!(tossups[0].id(), Some("t1"));
}

#[tokio::test]
async fn test_packet_bonuses_only() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/packet-bonuses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bonuses": [bonus_json(5), bonus_json(4)]
        })))
        .mount(&server)
        .await;

    let bonuses = assert_ok!(client.packets().bonuses("2023 Example Set", 2).await);
    assert_eq!(bonuses[0].leadin(), "bonus 4");
    assert_eq!(bonuses[1].category(), Category::History);
}

#[tokio::test]
async fn test_num_packets() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/num-packets"))
        .and(query_param("setName", "2023 Example Set"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "numPackets": 12 })))
        .mount(&server)
        .await;

    assert_eq!(client.packets().count("2023 Example Set").await.unwrap(), 12);
    assert_eq!(client.sets().num_packets("2023 Example Set").await.unwrap(), 12);
}

#[tokio::test]
async fn test_set_list() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/set-list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "setList": ["2022 Set A", "2023 Set B"]
        })))
        .mount(&server)
        .await;

    let sets = client.sets().list().await.unwrap();
    assert_eq!(sets, vec!["2022 Set A", "2023 Set B"]);
}

#[tokio::test]
async fn test_room_list() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/multiplayer/room-list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "roomList": [
                { "roomName": "hsquizbowl", "playerCount": 40, "onlineCount": 2, "isPermanent": true },
                { "roomName": "friday-practice" }
            ]
        })))
        .mount(&server)
        .await;

    let rooms = client.rooms().list().await.unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].is_permanent, Some(true));
    assert_eq!(rooms[1].room_name, "friday-practice");
}

#[tokio::test]
async fn test_random_tossups() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/random-tossup"))
        .and(query_param("number", "2"))
        .and(query_param("difficulties", "3,4"))
        .and(query_param("categories", "Science"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tossups": [tossup_json(7, "x (*) y"), tossup_json(4, "z")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tossups = client
        .random()
        .tossups()
        .number(2)
        .difficulties([Difficulty::HsRegular, Difficulty::HsHard])
        .categories([Category::Science])
        .send()
        .await
        .unwrap();

    // Random results keep the server's order
    assert_eq!(tossups[0].question_number(), 7);
    assert!(tossups[0].powerable());
}

#[tokio::test]
async fn test_random_bonuses() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/random-bonus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bonuses": [bonus_json(9)]
        })))
        .mount(&server)
        .await;

    let bonuses = client.random().bonuses().send().await.unwrap();
    assert_eq!(bonuses.len(), 1);
    assert_eq!(bonuses[0].lines(), vec!["bonus 9", "p1", "p2", "p3"]);
}

#[tokio::test]
async fn test_random_name() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/random-name"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "randomName": "quiet-otter" })),
        )
        .mount(&server)
        .await;

    assert_eq!(client.random().name().await.unwrap(), "quiet-otter");
}

#[tokio::test]
async fn test_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("queryString", "newton"))
        .and(query_param("questionType", "tossup"))
        .and(query_param("searchType", "answer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tossups": { "count": 57, "questionArray": [tossup_json(1, "newton tossup")] },
            "bonuses": { "count": 0, "questionArray": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = client
        .query("newton")
        .question_type(QuestionType::Tossup)
        .search_type(qbreader_core::SearchType::Answer)
        .send()
        .await
        .unwrap();

    assert_eq!(results.tossup_count, 57);
    assert_eq!(results.len(), 1);
    assert!(results.bonuses.is_empty());
}

#[tokio::test]
async fn test_query_missing_bonus_page() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tossups": { "count": 0, "questionArray": [] }
        })))
        .mount(&server)
        .await;

    let results = client.query("nothing").send().await.unwrap();
    assert!(results.is_empty());
    assert_eq!(results.bonus_count, 0);
}

#[tokio::test]
async fn test_report_question() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/report-question"))
        .and(body_json(json!({
            "_id": "t1",
            "reason": "wrong-category",
            "description": "This is a chemistry question"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(
        client
            .report()
            .question("t1", "wrong-category", "This is a chemistry question")
            .await
    );
}

#[tokio::test]
async fn test_report_requires_id() {
    let (_server, client) = setup().await;

    let err = assert_err!(client.report().question("", "other", "").await);
    assert!(err.is_invalid_value());
}

#[tokio::test]
async fn test_invalid_category_surfaces_as_invalid_value() {
    let (server, client) = setup().await;

    let mut bad = tossup_json(1, "q");
    bad["category"] = json!("NotARealCategory");

    Mock::given(method("GET"))
        .and(path("/api/random-tossup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tossups": [bad] })))
        .mount(&server)
        .await;

    let err = client.random().tossups().send().await.unwrap_err();
    assert!(err.is_invalid_value(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_invalid_difficulty_surfaces_as_invalid_value() {
    let (server, client) = setup().await;

    let mut bad = bonus_json(1);
    bad["difficulty"] = json!(11);

    Mock::given(method("GET"))
        .and(path("/api/packet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tossups": [],
            "bonuses": [bad]
        })))
        .mount(&server)
        .await;

    let err = client.packets().packet("2023 Example Set", 1).await.unwrap_err();
    assert!(matches!(err, QbError::InvalidValue { kind: "difficulty", .. }));
}

#[tokio::test]
async fn test_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/num-packets"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "set not found" })))
        .mount(&server)
        .await;

    let err = client.packets().count("No Such Set").await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert!(matches!(err, QbError::NotFound { ref resource } if resource == "set not found"));
}

#[tokio::test]
async fn test_rate_limited() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/set-list"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client.sets().list().await.unwrap_err();
    assert!(matches!(err, QbError::RateLimited));
}

#[tokio::test]
async fn test_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/set-list"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let err = client.sets().list().await.unwrap_err();
    match err {
        QbError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/random-name"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.random().name().await.unwrap_err();
    assert!(matches!(err, QbError::Json(_)));
}
