//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_projet(server: &TestServer) -> Value {
    let response = server.post("/projets", &projet_request()).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_post(server: &TestServer, request: &PostRequest) -> Value {
    let response = server.post("/forum", request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn add_comment(server: &TestServer, post_id: i64, author: &str, content: &str) -> Value {
    let response = server
        .post_form(
            &format!("/forum-interaction/comment/{post_id}"),
            &[("author", author), ("content", content)],
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    body["comment"].clone()
}

fn id_of(value: &Value) -> i64 {
    value["id"].as_i64().unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Projet / Tache Tests
// ============================================================================

#[tokio::test]
async fn test_projet_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let projet = create_projet(&server).await;
    let id = id_of(&projet);
    assert_eq!(projet["enabled"], true);

    let response = server
        .put(
            &format!("/projets/{id}"),
            &json!({"nom": "Renommé", "description": "Une description assez longue"}),
        )
        .await
        .unwrap();
    let updated: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["nom"], "Renommé");

    let response = server.get(&format!("/projets/{id}")).await.unwrap();
    let detail: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail["taches"], json!([]));

    let response = server.delete(&format!("/projets/{id}")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/projets/{id}")).await.unwrap();
    let error: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error["success"], false);
}

#[tokio::test]
async fn test_projet_validation_error_lists_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .post("/projets", &json!({"nom": "X", "description": "court"}))
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["details"]["description"].is_array());
}

#[tokio::test]
async fn test_projet_search_shape() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let projet = create_projet(&server).await;
    let nom = projet["nom"].as_str().unwrap().to_string();

    let response = server
        .get(&format!("/projets/api/search?search={}&sort=bogus&order=sideways", nom.replace(' ', "%20")))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["total"], 1);
    assert_eq!(body["page"], 1);
    let item = &body["projets"][0];
    assert_eq!(item["nom"], nom);
    // dd/mm/YYYY
    let date = item["dateCreation"].as_str().unwrap();
    assert_eq!(date.len(), 10);
    assert_eq!(&date[2..3], "/");
}

#[tokio::test]
async fn test_tache_lifecycle_and_cascade() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let projet_id = id_of(&create_projet(&server).await);

    let response = server.post("/taches", &tache_request(projet_id)).await.unwrap();
    let tache: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let tache_id = id_of(&tache);
    assert_eq!(tache["statut"], "En cours");
    assert_eq!(tache["priorite_label"], "Haute");

    let response = server
        .get(&format!("/taches/api/search?projet={projet_id}&priorite=9&statut=nope"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["total"], 1);
    assert_eq!(body["taches"][0]["projet"]["id"], projet_id);

    server.delete(&format!("/projets/{projet_id}")).await.unwrap();
    let response = server.get(&format!("/taches/{tache_id}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_tache_requires_existing_projet() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.post("/taches", &tache_request(i64::MAX)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_projects_dashboard() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    create_projet(&server).await;

    let response = server.get("/admin").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["totalProjets"].as_i64().unwrap() >= 1);
    assert!(body["projetsEnabled"].as_i64().unwrap() <= body["totalProjets"].as_i64().unwrap());
}

// ============================================================================
// Forum Tests
// ============================================================================

#[tokio::test]
async fn test_show_post_counts_views() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let post = create_post(&server, &PostRequest::unique()).await;
    let id = id_of(&post);
    assert_eq!(post["views"], 0);
    assert_eq!(post["tags"], json!(["rust", "examens"]));

    server.get(&format!("/forum/{id}")).await.unwrap();
    let response = server.get(&format!("/forum/{id}")).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["views"], 2);

    let response = server.post(&format!("/forum/{id}/like"), &json!({})).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["likes"], 1);
}

#[tokio::test]
async fn test_post_author_defaults_to_anonyme() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let mut request = PostRequest::unique();
    request.author = None;

    let post = create_post(&server, &request).await;
    assert_eq!(post["author"], "Anonyme");
}

#[tokio::test]
async fn test_forum_search_merges_comment_authors() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = format!("lecteur{}z", unique_suffix());

    let own = create_post(&server, &PostRequest::unique().with_author(author.clone())).await;
    let other = create_post(&server, &PostRequest::unique()).await;
    add_comment(&server, id_of(&other), &author, "Merci pour le partage").await;

    let response = server
        .get(&format!("/forum/search?author={author}"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["total"], 1);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["id"], own["id"]);
    assert_eq!(body["data"][1]["id"], other["id"]);
    assert_eq!(body["data"][1]["commentsCount"], 1);
}

#[tokio::test]
async fn test_forum_search_unknown_sort_falls_back() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .get("/forum/search?sortField=nope&sortDir=sideways&page=abc&limit=500")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body["count"].as_u64().unwrap() <= 100);
}

#[tokio::test]
async fn test_comment_search_on_missing_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get(&format!("/forum/{}/comments/search", i64::MAX)).await.unwrap();
    let error: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error["code"], "UNKNOWN_POST");
}

// ============================================================================
// Forum Interaction Tests
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let post_id = id_of(&create_post(&server, &PostRequest::unique()).await);
    let comment = add_comment(&server, post_id, "Lina", "Premier !").await;
    let comment_id = id_of(&comment);
    assert_eq!(comment["postId"], post_id);

    let response = server
        .post_form(
            &format!("/forum-interaction/comment-edit/{comment_id}"),
            &[("content", "Premier, edité")],
        )
        .await
        .unwrap();
    let edited: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited["comment"]["content"], "Premier, edité");
    assert!(edited["comment"]["updatedAt"].is_string());

    let response = server
        .post(&format!("/forum-interaction/comment-delete/{comment_id}"), &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete(&format!("/forum-interaction/comment-delete/{comment_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_comment_missing_fields() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let post_id = id_of(&create_post(&server, &PostRequest::unique()).await);

    let response = server
        .post_form(
            &format!("/forum-interaction/comment/{post_id}"),
            &[("content", "Sans auteur")],
        )
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"], "Missing fields");

    // HTML forms send empty fields rather than omitting them
    let response = server
        .post_form(
            &format!("/forum-interaction/comment/{post_id}"),
            &[("content", ""), ("author", "bob")],
        )
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"], "Missing fields");
    assert_eq!(error["code"], "MISSING_FIELDS");

    let comment_id = id_of(&add_comment(&server, post_id, "Lina", "Premier !").await);
    let response = server
        .post_form(
            &format!("/forum-interaction/comment-edit/{comment_id}"),
            &[("content", "")],
        )
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"], "Content is required");
}

#[tokio::test]
async fn test_reaction_toggle_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let post_id = id_of(&create_post(&server, &PostRequest::unique()).await);
    let path = format!("/forum-interaction/react/{post_id}");

    let response = server
        .post_form(&path, &[("type", "love"), ("author", "Sam")])
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["counts"]["love"], 1);
    assert_eq!(body["total"], 1);

    // Switching type keeps the total
    let response = server
        .post(&path, &json!({"type": "wow", "author": "Sam"}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["counts"]["love"], 0);
    assert_eq!(body["counts"]["wow"], 1);
    assert_eq!(body["total"], 1);

    let response = server
        .post_form(&path, &[("type", "wow"), ("author", "Sam")])
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["total"], 0);
    assert_eq!(body["counts"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn test_reaction_rejects_bad_input() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let post_id = id_of(&create_post(&server, &PostRequest::unique()).await);
    let path = format!("/forum-interaction/react/{post_id}");

    let response = server
        .post_form(&path, &[("type", "clap"), ("author", "Sam")])
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"], "Invalid reaction type");

    let response = server.post_form(&path, &[("type", "like")]).await.unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error["error"], "Author is required");

    let response = server
        .post_form(
            &format!("/forum-interaction/comment-react/{}", i64::MAX),
            &[("type", "like"), ("author", "Sam")],
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Forum Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_only_touches_admin_posts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user_post = create_post(&server, &PostRequest::unique()).await;
    let user_post_id = id_of(&user_post);

    let response = server.post("/admin/posts", &PostRequest::unique()).await.unwrap();
    let admin_post: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(admin_post["createdByAdmin"], true);

    let response = server
        .put(&format!("/admin/posts/{user_post_id}"), &PostRequest::unique())
        .await
        .unwrap();
    let error: Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error["code"], "NOT_ADMIN_POST");

    let response = server
        .put(&format!("/admin/posts/all/{user_post_id}"), &PostRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/admin/posts").await.unwrap();
    let list: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let listed = list["data"].as_array().unwrap();
    assert!(listed.iter().all(|p| p["createdByAdmin"] == true));
    assert!(listed.iter().any(|p| p["id"] == admin_post["id"]));
}

#[tokio::test]
async fn test_admin_comment_must_belong_to_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.post("/admin/posts", &PostRequest::unique()).await.unwrap();
    let admin_post: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let admin_post_id = id_of(&admin_post);

    let other_post_id = id_of(&create_post(&server, &PostRequest::unique()).await);
    let stray = add_comment(&server, other_post_id, "Noor", "Hors sujet").await;

    let response = server
        .delete(&format!("/admin/posts/{admin_post_id}/comments/{}", id_of(&stray)))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let own = add_comment(&server, admin_post_id, "Noor", "Bien vu").await;
    let response = server
        .put(
            &format!("/admin/posts/{admin_post_id}/comments/{}", id_of(&own)),
            &json!({"content": "Modéré"}),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["comment"]["content"], "Modéré");
}

#[tokio::test]
async fn test_admin_forum_dashboard() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = format!("moderateur{}z", unique_suffix());
    create_post(&server, &PostRequest::unique().with_author(author.clone())).await;

    let response = server.get(&format!("/admin/forum?q={author}")).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["totalPosts"].as_i64().unwrap() >= 1);
    assert!(body["avgComments"].is_number());
    assert_eq!(body["posts"].as_array().unwrap().len(), 1);
    assert_eq!(body["posts"][0]["author"], author);
}

// ============================================================================
// Cours / Quiz Tests
// ============================================================================

#[tokio::test]
async fn test_cours_and_quiz_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.post("/cours", &cours_request()).await.unwrap();
    let cours: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let cours_id = id_of(&cours);
    assert_eq!(cours["typeContenu"], "pdf");

    let response = server.post("/quiz", &quiz_request(cours_id)).await.unwrap();
    let quiz: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(quiz["questions"].as_array().unwrap().len(), 3);

    let response = server.get(&format!("/cours/{cours_id}/quiz")).await.unwrap();
    let quizzes: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(quizzes["data"].as_array().unwrap().len(), 1);

    server.delete(&format!("/cours/{cours_id}")).await.unwrap();
    let response = server.get(&format!("/quiz/{}", id_of(&quiz))).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_cours_rejects_past_date_and_digits() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let mut request = cours_request();
    request["titre"] = json!("Cours 101");
    request["date_publication"] = json!("2001-01-01T00:00:00Z");

    let response = server.post("/cours", &request).await.unwrap();
    let error: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(error["details"]["titre"].is_array());
    assert!(error["details"]["date_publication"].is_array());
}

#[tokio::test]
async fn test_quiz_requires_existing_cours() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.post("/quiz", &quiz_request(i64::MAX)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Catalogue Tests
// ============================================================================

#[tokio::test]
async fn test_catalogue() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.post("/courses", &course_request()).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let later = server.post("/events", &event_request(30)).await.unwrap();
    let later: Value = assert_json(later, StatusCode::CREATED).await.unwrap();
    let sooner = server.post("/events", &event_request(2)).await.unwrap();
    let sooner: Value = assert_json(sooner, StatusCode::CREATED).await.unwrap();

    let response = server.get("/events").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(id_of)
        .collect();
    let sooner_pos = ids.iter().position(|id| *id == id_of(&sooner)).unwrap();
    let later_pos = ids.iter().position(|id| *id == id_of(&later)).unwrap();
    assert!(sooner_pos < later_pos);

    let response = server.post("/courses", &json!({"title": "   "})).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
