//! Integration tests for [`CocktailDbClient`] against a wiremock server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shaker::client::CocktailDbClient;
use shaker::{CocktailCode, RecipeSource, TransportError};

fn mojito_body() -> serde_json::Value {
    json!({
        "drinks": [{
            "idDrink": "11000",
            "strDrink": "Mojito",
            "strDrinkAlternate": null,
            "strTags": "IBA,ContemporaryClassic,Alcoholic,USA,Asia,Vegan,Citrus,Brunch,Hangover,Mild",
            "strVideo": null,
            "strCategory": "Cocktail",
            "strIBA": "Contemporary Classics",
            "strAlcoholic": "Alcoholic",
            "strGlass": "Highball glass",
            "strInstructions": "Muddle mint leaves with sugar and lime juice. Add a splash of soda water and fill the glass with cracked ice. Pour the rum and top with soda water. Garnish and serve with straw.",
            "strInstructionsES": null,
            "strInstructionsDE": "Minzblätter mit Zucker und Limettensaft verrühren.",
            "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/metwgh1606770327.jpg",
            "strIngredient1": "Light rum",
            "strIngredient2": "Lime",
            "strIngredient3": "Sugar",
            "strIngredient4": "Mint",
            "strIngredient5": "Soda water",
            "strIngredient6": null,
            "strIngredient15": null,
            "strMeasure1": "2-3 oz ",
            "strMeasure2": "Juice of 1 ",
            "strMeasure3": "2 tsp ",
            "strMeasure4": "2-4 ",
            "strMeasure5": null,
            "strMeasure15": null,
            "strImageSource": null,
            "strImageAttribution": null,
            "strCreativeCommonsConfirmed": "Yes",
            "dateModified": "2016-11-15 13:02:28"
        }]
    })
}

// =============================================================================
// Successful lookups
// =============================================================================

#[tokio::test]
async fn search_decodes_recipes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .and(query_param("s", "mojito"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mojito_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = CocktailDbClient::with_base_url(server.uri()).unwrap();
    let response = client.search(CocktailCode::Mojito).await.unwrap();

    let recipes = response.into_recipes();
    assert_eq!(recipes.len(), 1);
    let mojito = &recipes[0];
    assert_eq!(mojito.id, "11000");
    assert_eq!(mojito.name, "Mojito");
    assert_eq!(mojito.glass, "Highball glass");
    assert_eq!(mojito.ingredients.len(), 5);
    assert_eq!(mojito.ingredients[4].ingredient.as_deref(), Some("Soda water"));
    assert!(mojito.ingredients[4].measure.is_none());
    assert_eq!(mojito.creative_commons_confirmed.as_deref(), Some("Yes"));
    assert!(mojito.localized_instructions.de.is_some());
}

#[tokio::test]
async fn search_sends_code_as_query_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/json/v1/1/search.php"))
        .and(query_param("s", "a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "drinks": null })))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        CocktailDbClient::with_base_url(format!("{}/api/json/v1/1", server.uri())).unwrap();
    let response = client.search(CocktailCode::A1).await.unwrap();
    assert!(response.drinks.is_none());
}

#[tokio::test]
async fn null_drinks_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"drinks":null}"#))
        .mount(&server)
        .await;

    let client = CocktailDbClient::with_base_url(server.uri()).unwrap();
    let response = client.search(CocktailCode::Kir).await.unwrap();
    assert!(response.into_recipes().is_empty());
}

#[tokio::test]
async fn works_through_trait_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .and(query_param("s", "mojito"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mojito_body()))
        .mount(&server)
        .await;

    let source: Box<dyn RecipeSource> =
        Box::new(CocktailDbClient::with_base_url(server.uri()).unwrap());
    assert_eq!(source.name(), "thecocktaildb");
    let response = source.search(CocktailCode::Mojito).await.unwrap();
    assert_eq!(response.into_recipes()[0].name, "Mojito");
}

// =============================================================================
// Transport failures
// =============================================================================

#[tokio::test]
async fn non_success_status_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = CocktailDbClient::with_base_url(server.uri()).unwrap();
    let err = client.search(CocktailCode::Margarita).await.unwrap_err();

    assert!(matches!(err, TransportError::Status { status: 500, .. }));
    assert!(err.url().contains("s=margarita"));
    assert!(err.to_string().contains("HTTP 500"));
}

#[tokio::test]
async fn malformed_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = CocktailDbClient::with_base_url(server.uri()).unwrap();
    let err = client.search(CocktailCode::Margarita).await.unwrap_err();
    assert!(matches!(err, TransportError::Decode { .. }));
}

#[tokio::test]
async fn recipe_missing_required_field_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "drinks": [{ "idDrink": "1", "strDrink": "Half a record" }]
        })))
        .mount(&server)
        .await;

    let client = CocktailDbClient::with_base_url(server.uri()).unwrap();
    let err = client.search(CocktailCode::Kir).await.unwrap_err();
    assert!(matches!(err, TransportError::Decode { .. }));
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    // Nothing listens on the discard port.
    let client = CocktailDbClient::with_base_url("http://127.0.0.1:9").unwrap();
    let err = client.search(CocktailCode::Mojito).await.unwrap_err();
    assert!(matches!(err, TransportError::Request { .. }));
}
