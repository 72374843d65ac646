use argh::FromArgs;
use kova_tx::{
    build_delegate, build_stake, build_transfer, build_undelegate, build_unstake, Envelope,
    NodeClient, TxSubmitter as _,
};
use log::{debug, info};

const DEFAULT_RPC: &str = "http://localhost:7000";
const DEFAULT_CHAIN_ID: &str = "kova-devnet";

#[derive(FromArgs, Debug)]
#[argh(description = "Build a Kova transaction and send it to a node")]
struct Args {
    #[argh(option)]
    /// node RPC base URL (default: $KOVA_RPC or http://localhost:7000)
    rpc: Option<String>,

    #[argh(option)]
    /// chain id to tag the transaction with (default: $KOVA_CHAIN_ID or kova-devnet)
    chain_id: Option<String>,

    #[argh(option, short = 'n', default = "0")]
    /// nonce
    nonce: u64,

    #[argh(option, short = 'g')]
    /// gas price override
    gas_price: Option<String>,

    #[argh(switch, short = 'd')]
    /// dry run, print the envelope instead of sending it
    dry_run: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Command {
    Transfer(TransferArgs),
    Stake(StakeArgs),
    Unstake(UnstakeArgs),
    Delegate(DelegateArgs),
    Undelegate(UndelegateArgs),
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "transfer", description = "transfer funds")]
struct TransferArgs {
    #[argh(option, short = 't')]
    /// recipient address (hex)
    to: String,

    #[argh(option, short = 'a')]
    /// amount
    amount: u128,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "stake", description = "bond stake")]
struct StakeArgs {
    #[argh(option, short = 'a')]
    /// amount
    amount: u128,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "unstake", description = "release stake")]
struct UnstakeArgs {
    #[argh(option, short = 'a')]
    /// amount
    amount: u128,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "delegate", description = "delegate to a validator")]
struct DelegateArgs {
    #[argh(option, short = 'v')]
    /// validator address (hex)
    validator: String,

    #[argh(option, short = 'a')]
    /// amount
    amount: u128,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "undelegate", description = "withdraw a delegation")]
struct UndelegateArgs {
    #[argh(option, short = 'v')]
    /// validator address (hex)
    validator: String,

    #[argh(option, short = 'a')]
    /// amount
    amount: u128,
}

fn env_or(value: Option<String>, var: &str, default: &str) -> String {
    value
        .or_else(|| std::env::var(var).ok())
        .unwrap_or_else(|| default.to_string())
}

fn build_envelope(chain_id: &str, command: Command) -> anyhow::Result<Envelope> {
    let tx = match command {
        Command::Transfer(args) => build_transfer(chain_id, &args.to, args.amount)?,
        Command::Stake(args) => build_stake(chain_id, args.amount),
        Command::Unstake(args) => build_unstake(chain_id, args.amount),
        Command::Delegate(args) => build_delegate(chain_id, &args.validator, args.amount)?,
        Command::Undelegate(args) => build_undelegate(chain_id, &args.validator, args.amount)?,
    };

    Ok(tx)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Args = argh::from_env();

    let rpc = env_or(args.rpc, "KOVA_RPC", DEFAULT_RPC);
    let chain_id = env_or(args.chain_id, "KOVA_CHAIN_ID", DEFAULT_CHAIN_ID);
    debug!("rpc: {rpc}, chain id: {chain_id}");

    let mut tx = build_envelope(&chain_id, args.command)?.with_nonce(args.nonce);
    if let Some(gas_price) = args.gas_price {
        tx = tx.with_gas_price(gas_price);
    }

    if args.dry_run {
        println!("{}", tx.to_json()?);
        return Ok(());
    }

    info!("sending {:?} to {rpc}", tx.payload);
    let reply = NodeClient::new(rpc).send_raw_tx(&tx).await?;
    println!("{reply}");

    Ok(())
}
