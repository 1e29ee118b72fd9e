use clap::{Parser, Subcommand};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::error::Error;
use url::Url;

#[derive(Parser)]
#[command(name = "blogful")]
#[command(about = "A CLI for managing Blogful articles")]
struct Cli {
    /// Base URL for the Blogful service
    #[arg(long, default_value = "http://localhost:3000")]
    service_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all articles
    List,
    /// Show a single article
    Get { id: i32 },
    /// Publish a new article
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        content: String,
        /// How-to, Listicle, News, Interview or Story
        #[arg(short, long)]
        style: String,
    },
    /// Change some fields of an existing article
    Update {
        id: i32,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
        #[arg(short, long)]
        style: Option<String>,
    },
    /// Delete an article
    Delete { id: i32 },
}

#[derive(Serialize)]
struct ArticleFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<String>,
}

#[derive(Deserialize)]
struct ArticleResponse {
    id: i32,
}

fn articles_url(service_url: &str, id: Option<i32>) -> Result<Url, url::ParseError> {
    let base = Url::parse(service_url)?.join("api/articles")?;
    match id {
        Some(id) => Url::parse(&format!("{base}/{id}")),
        None => Ok(base),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let client = Client::new();
    let service_url = cli.service_url.as_str();

    match cli.command {
        Commands::List => {
            let response = client.get(articles_url(service_url, None)?).send().await?;
            print_json(response).await?;
        }
        Commands::Get { id } => {
            let response = client.get(articles_url(service_url, Some(id))?).send().await?;
            print_json(response).await?;
        }
        Commands::Add {
            title,
            content,
            style,
        } => {
            let payload = ArticleFields {
                title: Some(title),
                content: Some(content),
                style: Some(style),
            };
            add_article(&client, service_url, &payload).await?;
        }
        Commands::Update {
            id,
            title,
            content,
            style,
        } => {
            let payload = ArticleFields {
                title,
                content,
                style,
            };
            let response = client
                .patch(articles_url(service_url, Some(id))?)
                .json(&payload)
                .send()
                .await?;
            print_status(response, &format!("Article {id} updated")).await?;
        }
        Commands::Delete { id } => {
            let response = client
                .delete(articles_url(service_url, Some(id))?)
                .send()
                .await?;
            print_status(response, &format!("Article {id} deleted")).await?;
        }
    }

    Ok(())
}

async fn add_article(
    client: &Client,
    service_url: &str,
    payload: &ArticleFields,
) -> Result<(), Box<dyn Error>> {
    let response = client
        .post(articles_url(service_url, None)?)
        .json(payload)
        .send()
        .await?;

    if response.status().is_success() {
        let location = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let article: ArticleResponse = response.json().await?;
        println!("Article published with ID: {}", article.id);
        if let Some(location) = location {
            println!("Location: {location}");
        }
    } else {
        report_failure(response).await?;
    }

    Ok(())
}

async fn print_json(response: Response) -> Result<(), Box<dyn Error>> {
    if response.status().is_success() {
        let body: serde_json::Value = response.json().await?;
        println!("{body:#}");
    } else {
        report_failure(response).await?;
    }
    Ok(())
}

async fn print_status(response: Response, message: &str) -> Result<(), Box<dyn Error>> {
    if response.status().is_success() {
        println!("{message}");
    } else {
        report_failure(response).await?;
    }
    Ok(())
}

async fn report_failure(response: Response) -> Result<(), Box<dyn Error>> {
    eprintln!("Request failed: {}", response.status());
    eprintln!("Response: {}", response.text().await?);
    Ok(())
}
