use clap::Parser;
use live_rates::domain::model::{Shipment, ShipmentUpdate};
use live_rates::domain::ports::ReferenceData;
use live_rates::utils::format::{
    format_address_name, format_dimension, format_full_address, format_ref, format_weight,
};
use live_rates::utils::{logger, validation::Validate};
use live_rates::{ChannelUpdater, CliConfig, LogNavigator, LogNotifier, RateWorkflow, RestApiClient};
use tokio::sync::mpsc::UnboundedReceiver;

fn drain_updates(receiver: &mut UnboundedReceiver<ShipmentUpdate>, shipment: &mut Shipment) {
    while let Ok(update) = receiver.try_recv() {
        shipment.apply(update);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting live-rates CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }

    let mut shipment = Shipment::from_json_file(&config.shipment)?;

    let client = RestApiClient::from_config(&config);
    let (updater, mut receiver) = ChannelUpdater::channel();
    let mut workflow = RateWorkflow::new(
        client.clone(),
        client.clone(),
        LogNotifier,
        LogNavigator,
        updater,
    );

    let countries = match client.countries().await {
        Ok(countries) => countries,
        Err(e) => {
            tracing::warn!("Could not load country references: {}", e);
            Default::default()
        }
    };

    println!("Shipper:    {}", format_address_name(&shipment.shipper));
    println!("            {}", format_full_address(&shipment.shipper, &countries));
    println!("Recipient:  {}", format_address_name(&shipment.recipient));
    println!("            {}", format_full_address(&shipment.recipient, &countries));
    if let Some(parcel) = shipment.parcels.first() {
        println!("Parcel:     {}", format_dimension(parcel));
        println!("            {}", format_weight(parcel));
    }

    workflow.fetch_rates(&shipment).await;
    drain_updates(&mut receiver, &mut shipment);

    let Some(rates) = shipment.rates.clone().filter(|rates| !rates.is_empty()) else {
        println!("No rates returned for this shipment.");
        return Ok(());
    };

    println!("\nLive Rates:");
    for rate in &rates {
        let transit = rate
            .transit_days
            .map(|days| format!(" - {} Transit days", days))
            .unwrap_or_default();
        println!(
            "  [{}] {} {} {}{}",
            rate.id,
            format_ref(&rate.service),
            rate.total_charge,
            rate.currency,
            transit
        );
    }

    let chosen = match &config.service {
        Some(service) => rates.iter().find(|rate| &rate.service == service),
        None => rates.iter().min_by_key(|rate| rate.total_charge),
    };
    let Some(chosen) = chosen else {
        anyhow::bail!(
            "service {:?} not offered for this shipment",
            config.service.as_deref().unwrap_or_default()
        );
    };

    if !workflow.select_rate(&shipment, &chosen.id) {
        anyhow::bail!("rate {} is not selectable", chosen.id);
    }
    println!(
        "\nSelected: {} ({} {})",
        format_ref(&chosen.service),
        chosen.total_charge,
        chosen.currency
    );

    if config.buy {
        workflow.buy_shipment(&shipment).await;
        drain_updates(&mut receiver, &mut shipment);

        if shipment.selected_rate_id.is_some() {
            println!("Label purchased for rate {:?}", shipment.selected_rate_id);
        }
    } else {
        println!("Re-run with --buy to purchase this label.");
    }

    Ok(())
}
