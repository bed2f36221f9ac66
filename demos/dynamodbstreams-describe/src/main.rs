/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::ProvideRegion;
use dynamodbstreams::{Client, Config, Error, Region, SdkError, PKG_VERSION};
use structopt::StructOpt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The default AWS Region.
    #[structopt(short, long)]
    region: Option<String>,

    /// Only list the streams of this table.
    #[structopt(short, long)]
    table_name: Option<String>,

    /// Whether to display additional information.
    #[structopt(short, long)]
    verbose: bool,
}

/// Lists the DynamoDB streams of the account (or of one table) and describes each of them.
///
/// # Arguments
///
/// * `[-r REGION]` - The Region in which the client is created.
///    If not supplied, uses the value of the **AWS_REGION** environment variable.
///    If the environment variable is not set, defaults to **us-west-2**.
/// * `[-t TABLE-NAME]` - Only describe the streams of this table.
/// * `[-v]` - Whether to display additional information.
#[tokio::main]
async fn main() -> Result<(), SdkError<Error>> {
    let Opt {
        region,
        table_name,
        verbose,
    } = Opt::from_args();

    let region = match region {
        Some(region) => Region::new(region),
        None => aws_types::region::default_provider()
            .region()
            .await
            .unwrap_or_else(|| Region::new("us-west-2")),
    };

    if verbose {
        println!("DynamoDB Streams client version: {}", PKG_VERSION);
        println!("Region:                          {}", &region);
        println!();

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("info"))
            .with_span_events(FmtSpan::CLOSE)
            .init();
    }

    let client = Client::from_conf(Config::builder().region(region).build());

    let mut exclusive_start_stream_arn = None;
    loop {
        let mut request = client.list_streams();
        if let Some(table_name) = &table_name {
            request = request.table_name(table_name);
        }
        if let Some(arn) = exclusive_start_stream_arn.take() {
            request = request.exclusive_start_stream_arn(arn);
        }
        let page = request.send().await?;

        for stream in page.streams.unwrap_or_default() {
            let arn = match stream.stream_arn {
                Some(arn) => arn,
                None => continue,
            };
            let description = client
                .describe_stream()
                .stream_arn(&arn)
                .send()
                .await?
                .stream_description;
            match description {
                None => println!("Did not find stream {}", arn),
                Some(d) => {
                    println!("Stream {}:", arn);
                    println!("  Table:       {}", d.table_name.unwrap_or_default());
                    println!("  Label:       {}", d.stream_label.unwrap_or_default());
                    println!("  Status:      {:?}", d.stream_status);
                    println!("  View type:   {:?}", d.stream_view_type);
                    println!("  Shards:      {}", d.shards.map(|s| s.len()).unwrap_or(0));
                }
            }
        }

        match page.last_evaluated_stream_arn {
            Some(arn) => exclusive_start_stream_arn = Some(arn),
            None => break,
        }
    }

    Ok(())
}
