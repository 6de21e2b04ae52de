use serde_json::json;
use superheroes::entity::hero_power::Strength;

use crate::common::{DESCRIPTION, TestApp, routes};

mod power_listing {
    use super::*;

    #[tokio::test]
    async fn powers_are_listed_in_id_order() {
        let app = TestApp::spawn().await;
        let flight = app.insert_power("flight", DESCRIPTION).await;
        let senses = app
            .insert_power(
                "super human senses",
                "allows the wielder to use her senses at a super-human level",
            )
            .await;

        let res = app.get(routes::POWERS).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.body,
            json!([
                {"id": flight, "name": "flight", "description": DESCRIPTION},
                {
                    "id": senses,
                    "name": "super human senses",
                    "description": "allows the wielder to use her senses at a super-human level"
                },
            ])
        );
    }

    #[tokio::test]
    async fn power_detail_has_no_links() {
        let app = TestApp::spawn().await;
        let hero = app.insert_hero("Ororo Munroe", "Storm").await;
        let power = app.insert_power("flight", DESCRIPTION).await;
        app.insert_hero_power(hero, power, Strength::Average).await;

        let res = app.get(&routes::power(power)).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.body,
            json!({"id": power, "name": "flight", "description": DESCRIPTION})
        );
    }

    #[tokio::test]
    async fn unknown_power_returns_404() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::power(9999)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({"error": "Power not found"}));
    }

    #[tokio::test]
    async fn store_failure_returns_generic_500() {
        let app = TestApp::spawn().await;
        app.insert_power("flight", DESCRIPTION).await;
        app.execute("DROP TABLE hero_powers").await;
        app.execute("DROP TABLE powers").await;

        let res = app.get(routes::POWERS).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body, json!({"error": "Internal server error"}));
    }
}

mod power_update {
    use super::*;

    #[tokio::test]
    async fn valid_description_is_saved() {
        let app = TestApp::spawn().await;
        let id = app.insert_power("flight", DESCRIPTION).await;
        let description = "allows the wielder to fly at supersonic speed";

        let res = app
            .patch(&routes::power(id), &json!({"description": description}))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.body,
            json!({"id": id, "name": "flight", "description": description})
        );
        assert_eq!(app.stored_description(id).await, description);
    }

    #[tokio::test]
    async fn surrounding_whitespace_is_kept() {
        let app = TestApp::spawn().await;
        let id = app.insert_power("flight", DESCRIPTION).await;
        let description = "  allows the wielder to fly  ";

        let res = app
            .patch(&routes::power(id), &json!({"description": description}))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["description"], description);
    }

    #[tokio::test]
    async fn short_description_is_rejected_and_nothing_changes() {
        let app = TestApp::spawn().await;
        let id = app.insert_power("flight", DESCRIPTION).await;

        let res = app
            .patch(&routes::power(id), &json!({"description": "short"}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body, json!({"errors": ["validation errors"]}));
        assert_eq!(app.stored_description(id).await, DESCRIPTION);
    }

    #[tokio::test]
    async fn padded_short_description_is_rejected() {
        let app = TestApp::spawn().await;
        let id = app.insert_power("flight", DESCRIPTION).await;
        let padded = format!("{}{}{}", " ".repeat(10), "a".repeat(19), " ".repeat(10));

        let res = app
            .patch(&routes::power(id), &json!({"description": padded}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body, json!({"errors": ["validation errors"]}));
        assert_eq!(app.stored_description(id).await, DESCRIPTION);
    }

    #[tokio::test]
    async fn empty_description_is_rejected() {
        let app = TestApp::spawn().await;
        let id = app.insert_power("flight", DESCRIPTION).await;

        let res = app
            .patch(&routes::power(id), &json!({"description": ""}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(app.stored_description(id).await, DESCRIPTION);
    }

    #[tokio::test]
    async fn payload_without_description_is_a_no_op() {
        let app = TestApp::spawn().await;
        let id = app.insert_power("flight", DESCRIPTION).await;

        let empty = app.patch(&routes::power(id), &json!({})).await;
        let null = app
            .patch(&routes::power(id), &json!({"description": null}))
            .await;
        let unrelated = app
            .patch(&routes::power(id), &json!({"name": "renamed"}))
            .await;

        for res in [empty, null, unrelated] {
            assert_eq!(res.status, 200);
            assert_eq!(
                res.body,
                json!({"id": id, "name": "flight", "description": DESCRIPTION})
            );
        }
    }

    #[tokio::test]
    async fn unknown_power_returns_404() {
        let app = TestApp::spawn().await;

        let res = app
            .patch(
                &routes::power(9999),
                &json!({"description": "a perfectly long enough description"}),
            )
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({"error": "Power not found"}));
    }

    #[tokio::test]
    async fn malformed_body_returns_bad_request() {
        let app = TestApp::spawn().await;
        let id = app.insert_power("flight", DESCRIPTION).await;

        let res = app.patch_raw(&routes::power(id), "{\"description\": ").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body, json!({"error": "Bad request"}));
    }

    #[tokio::test]
    async fn non_string_description_returns_bad_request() {
        let app = TestApp::spawn().await;
        let id = app.insert_power("flight", DESCRIPTION).await;

        let res = app
            .patch(&routes::power(id), &json!({"description": 12345}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body, json!({"error": "Bad request"}));
        assert_eq!(app.stored_description(id).await, DESCRIPTION);
    }

    #[tokio::test]
    async fn failed_update_is_rolled_back() {
        let app = TestApp::spawn().await;
        let id = app.insert_power("flight", DESCRIPTION).await;
        app.execute(
            "CREATE TRIGGER reject_power_update BEFORE UPDATE ON powers \
             BEGIN SELECT RAISE(ABORT, 'store unavailable'); END;",
        )
        .await;

        let res = app
            .patch(
                &routes::power(id),
                &json!({"description": "allows the wielder to fly at supersonic speed"}),
            )
            .await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body, json!({"errors": ["An unexpected error occurred"]}));
        assert!(!res.text.contains("store unavailable"));
        assert_eq!(app.stored_description(id).await, DESCRIPTION);
    }
}

mod power_deletion {
    use super::*;

    #[tokio::test]
    async fn deleting_a_power_removes_its_links() {
        let app = TestApp::spawn().await;
        let hero = app.insert_hero("Janet Van Dyne", "The Wasp").await;
        let flight = app.insert_power("flight", DESCRIPTION).await;
        let strength = app.insert_power("super strength", DESCRIPTION).await;
        app.insert_hero_power(hero, flight, Strength::Strong).await;
        app.insert_hero_power(hero, strength, Strength::Weak).await;

        let res = app.delete(&routes::power(flight)).await;

        assert_eq!(res.status, 204);
        assert_eq!(app.get(&routes::power(flight)).await.status, 404);

        let hero_res = app.get(&routes::hero(hero)).await;
        let links = hero_res.body["hero_powers"].as_array().unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0]["power_id"], strength);
    }

    #[tokio::test]
    async fn deleting_unknown_power_returns_404() {
        let app = TestApp::spawn().await;

        let res = app.delete(&routes::power(42)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({"error": "Power not found"}));
    }
}
