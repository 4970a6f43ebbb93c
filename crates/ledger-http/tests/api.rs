//! Typed ledger operations against a mock API.

use std::sync::Arc;

use chrono::NaiveDate;
use ledger_core::models::{
    Account, Approvals, NewMilestone, NewTransaction, ProjectStatus, TransactionType,
};
use ledger_core::{ApiUrl, MemoryStore};
use ledger_http::{ClientConfig, Gateway, TransactionFilter};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(server: &MockServer) -> Gateway {
    let url = ApiUrl::new(format!("{}/api", server.uri())).unwrap();
    let store = MemoryStore::with_entries([("access_token", "A1"), ("refresh_token", "R1")]);
    Gateway::new(ClientConfig::new(url), Arc::new(store)).unwrap()
}

fn project_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "company": 4,
        "company_name": "Acme",
        "name": "Website revamp",
        "start_date": "2025-01-10",
        "end_date": null,
        "project_value": "150000.00",
        "received_amount": "50000.00",
        "status": status,
        "created_by": 7,
        "created_by_name": "alice",
        "created_at": "2025-01-10T09:00:00Z",
        "updated_at": "2025-01-11T09:00:00Z",
        "approvals": [
            {"id": 1, "project": id, "approver": 7, "approver_name": "alice", "approved": true, "notes": ""},
            {"id": 2, "project": id, "approver": 8, "approver_name": "bob", "approved": false, "notes": ""}
        ],
        "all_approved": false,
        "pending_count": 1
    })
}

fn transaction_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "company": 4,
        "transaction_type": "EXPENSE",
        "amount": "1250.50",
        "description": "Hosting",
        "date": "2025-02-01",
        "account": "PARTNER1",
        "status": "PENDING",
        "approvals": [],
        "pending_count": 2
    })
}

#[tokio::test]
async fn projects_are_listed_for_one_company() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects/"))
        .and(query_param("company", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([project_json(3, "PENDING")])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = gateway(&server).list_projects(Some(4)).await.unwrap();

    assert_eq!(projects.len(), 1);
    let project = &projects[0];
    assert_eq!(project.status, ProjectStatus::Pending);
    assert_eq!(project.project_value.as_str(), "150000.00");
    assert_eq!(project.approved_count(), 1);
    assert_eq!(project.approval_total(), 2);
}

#[tokio::test]
async fn project_approval_sends_notes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/projects/3/approve/"))
        .and(body_json(json!({"notes": "Looks right"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_json(3, "APPROVED")))
        .expect(1)
        .mount(&server)
        .await;

    let project = gateway(&server)
        .approve_project(3, Some("Looks right"))
        .await
        .unwrap();
    assert_eq!(project.status, ProjectStatus::Approved);
}

#[tokio::test]
async fn rejection_reports_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/projects/3/reject/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "Only directors of this company can reject"
        })))
        .mount(&server)
        .await;

    let err = gateway(&server).reject_project(3).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert!(err.to_string().contains("Only directors of this company can reject"));
}

#[tokio::test]
async fn transactions_filter_by_company_and_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/transactions/"))
        .and(query_param("company", "4"))
        .and(query_param("type", "EXPENSE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([transaction_json(9)])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = TransactionFilter::company(4).of_type(TransactionType::Expense);
    let transactions = gateway(&server).list_transactions(filter).await.unwrap();

    assert_eq!(transactions[0].amount.value(), 1250.5);
    assert_eq!(transactions[0].account, Account::Partner1);
}

#[tokio::test]
async fn unfiltered_listing_sends_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/transactions/"))
        .and(query_param_is_missing("company"))
        .and(query_param_is_missing("type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let transactions = gateway(&server)
        .list_transactions(TransactionFilter::default())
        .await
        .unwrap();
    assert!(transactions.is_empty());
}

#[tokio::test]
async fn transaction_is_created_with_wire_names() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/transactions/"))
        .and(body_json(json!({
            "company": 4,
            "transaction_type": "EXPENSE",
            "amount": "1250.50",
            "description": "Hosting",
            "date": "2025-02-01",
            "account": "PARTNER1",
            "is_project_related": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(transaction_json(9)))
        .expect(1)
        .mount(&server)
        .await;

    let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let new = NewTransaction::new(4, TransactionType::Expense, "1250.50", date, Account::Partner1)
        .with_description("Hosting");
    let created = gateway(&server).create_transaction(&new).await.unwrap();
    assert_eq!(created.id, 9);
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/milestones/5/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    gateway(&server).delete_milestone(5).await.unwrap();
}

#[tokio::test]
async fn milestone_validation_error_is_rendered() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/milestones/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "An error occurred",
            "detail": {"target_amount": ["Ensure this value is greater than 0."]}
        })))
        .mount(&server)
        .await;

    let new = NewMilestone {
        company: 4,
        target_amount: "0".into(),
        label: "Zero".to_string(),
    };
    let err = gateway(&server).create_milestone(&new).await.unwrap_err();
    assert!(err.to_string().contains("Ensure this value is greater than 0."));
}

#[tokio::test]
async fn summary_is_requested_per_company() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/summary/"))
        .and(query_param("company", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "income_total": "200000.00",
            "expense_total": "50000.00",
            "salary_total": "30000.00",
            "total_balance": "120000.00",
            "partner1_balance": "60000.00",
            "partner2_balance": "40000.00",
            "company_balance": "20000.00",
            "director_balances": [
                {"director_id": 7, "director_name": "alice", "balance": "60000.00"}
            ],
            "milestones": [
                {"id": 1, "target": "100000.00", "label": "First lakh", "achieved": true,
                 "days_taken": 42, "achieved_at": "2025-03-01T00:00:00Z", "progress": 100.0}
            ],
            "today": "2025-04-01"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let summary = gateway(&server).summary(4).await.unwrap();
    assert_eq!(summary.total_balance.as_str(), "120000.00");
    assert_eq!(summary.director_balances[0].director_name, "alice");
    assert!(summary.milestones[0].achieved);
}

#[tokio::test]
async fn admin_dashboard_counts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/dashboard/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"company_count": 3, "director_count": 8})),
        )
        .mount(&server)
        .await;

    let dashboard = gateway(&server).dashboard().await.unwrap();
    assert_eq!(dashboard.company_count, 3);
    assert_eq!(dashboard.director_count, 8);
}

#[tokio::test]
async fn directors_are_listed_for_one_company() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/directors/"))
        .and(query_param("company", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "user": {
                "id": 7, "username": "alice", "email": "alice@example.com",
                "first_name": "Alice", "last_name": "Rao", "role": "DIRECTOR",
                "phone": "", "is_staff": false, "is_superuser": false
            },
            "user_id": 7,
            "company": 4,
            "company_name": "Acme",
            "added_at": "2025-01-01T00:00:00Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let directors = gateway(&server).list_directors(Some(4)).await.unwrap();
    assert_eq!(directors[0].user.username, "alice");
}

#[tokio::test]
async fn salaries_are_listed_for_one_company() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/salaries/"))
        .and(query_param("company", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 2,
            "company": 4,
            "director": 7,
            "director_name": "alice",
            "amount": "30000.00",
            "description": "March",
            "date": "2025-03-31",
            "account": "COMPANY",
            "status": "APPROVED"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let salaries = gateway(&server).list_salaries(Some(4)).await.unwrap();
    assert_eq!(salaries[0].director_name, "alice");
    assert_eq!(salaries[0].account, Account::Company);
}
