//! Thin JSON-RPC client for fetching program accounts.
//!
//! Only the two read methods the client needs are wrapped. Account data
//! travels base64-encoded; decoding to records happens in `accounts`, with
//! per-account failures skipped rather than failing a whole batch.

use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use solana_program::pubkey::Pubkey;
use tracing::debug;

use crate::accounts::{self, DecodedBetAccount, SkippedAccount};
use crate::constants::Network;
use crate::records::{OperationalStatus, ProgramConfig, BET_ID_BYTES, MIN_BET_WIRE_BYTES};

/// Byte offset of the requester key inside a bet account, right after the
/// 16-byte bet id.
const REQUESTER_OFFSET: u64 = BET_ID_BYTES as u64;

#[derive(Debug, Serialize)]
struct JsonRpcRequest<T> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: T,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct AccountInfoResponse {
    value: Option<AccountData>,
}

#[derive(Debug, Deserialize)]
struct AccountData {
    /// `(payload, encoding)` pair as returned for base64-encoded accounts.
    data: (String, String),
}

#[derive(Debug, Deserialize)]
struct KeyedAccount {
    pubkey: String,
    account: AccountData,
}

/// `getProgramAccounts` filter. Serializes to the RPC wire shape.
#[derive(Debug, Clone, Serialize)]
pub enum AccountFilter {
    #[serde(rename = "memcmp")]
    Memcmp {
        offset: u64,
        bytes: String,
        encoding: &'static str,
    },
    #[serde(rename = "dataSize")]
    DataSize(u64),
}

impl AccountFilter {
    pub fn memcmp_base58(offset: u64, bytes: String) -> Self {
        AccountFilter::Memcmp {
            offset,
            bytes,
            encoding: "base58",
        }
    }

    pub fn memcmp_base64(offset: u64, bytes: &[u8]) -> Self {
        AccountFilter::Memcmp {
            offset,
            bytes: BASE64.encode(bytes),
            encoding: "base64",
        }
    }
}

/// JSON-RPC client bound to one network.
pub struct RpcClient {
    client: Client,
    url: String,
    network: Network,
}

impl RpcClient {
    pub fn new(network: Network) -> Self {
        Self::with_url(network, network.default_rpc_url().to_string())
    }

    pub fn with_url(network: Network, url: String) -> Self {
        Self {
            client: Client::new(),
            url,
            network,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    async fn call<P, R>(&self, method: &'static str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };
        debug!(method, "rpc request");

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, "rpc response");

        if !status.is_success() {
            return Err(anyhow!("rpc request failed with status {status}: {body}"));
        }
        let parsed: JsonRpcResponse<R> = serde_json::from_str(&body)?;
        if let Some(err) = parsed.error {
            return Err(anyhow!("rpc error {}: {}", err.code, err.message));
        }
        parsed
            .result
            .ok_or_else(|| anyhow!("rpc response carried neither result nor error"))
    }

    /// Raw bytes of a single account, or `None` if it does not exist.
    pub async fn get_account_info(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        let response: AccountInfoResponse = self
            .call(
                "getAccountInfo",
                json!([address.to_string(), { "encoding": "base64" }]),
            )
            .await?;
        match response.value {
            Some(account) => Ok(Some(BASE64.decode(account.data.0)?)),
            None => Ok(None),
        }
    }

    /// All accounts owned by `program`, optionally filtered server-side.
    pub async fn get_program_accounts(
        &self,
        program: &Pubkey,
        filters: &[AccountFilter],
    ) -> Result<Vec<(String, Vec<u8>)>> {
        let params = if filters.is_empty() {
            json!([program.to_string(), { "encoding": "base64" }])
        } else {
            json!([program.to_string(), { "encoding": "base64", "filters": filters }])
        };
        let response: Vec<KeyedAccount> = self.call("getProgramAccounts", params).await?;
        response
            .into_iter()
            .map(|keyed| Ok((keyed.pubkey, BASE64.decode(keyed.account.data.0)?)))
            .collect()
    }

    /// A user's bet accounts. `only_unmatched` restricts to accounts still at
    /// the minimum size (no matchers yet); `bet_id` narrows to a single bet.
    pub async fn fetch_user_bets(
        &self,
        bettor: &Pubkey,
        only_unmatched: bool,
        bet_id: Option<[u8; BET_ID_BYTES]>,
    ) -> Result<(Vec<DecodedBetAccount>, Vec<SkippedAccount>)> {
        let mut filters = vec![AccountFilter::memcmp_base58(
            REQUESTER_OFFSET,
            bettor.to_string(),
        )];
        if only_unmatched {
            filters.push(AccountFilter::DataSize(MIN_BET_WIRE_BYTES as u64));
        }
        if let Some(id) = bet_id {
            filters.push(AccountFilter::memcmp_base64(0, &id));
        }
        let program = self.network.addresses().program;
        let fetched = self.get_program_accounts(&program, &filters).await?;
        Ok(accounts::decode_bet_accounts(fetched))
    }

    /// Every bet account the program owns.
    pub async fn fetch_all_bets(
        &self,
    ) -> Result<(Vec<DecodedBetAccount>, Vec<SkippedAccount>)> {
        let program = self.network.addresses().program;
        let fetched = self.get_program_accounts(&program, &[]).await?;
        // The program also owns config accounts; anything below the minimum
        // bet size cannot be a bet and is not worth a skip entry.
        let candidates = fetched
            .into_iter()
            .filter(|(_, data)| data.len() >= MIN_BET_WIRE_BYTES);
        Ok(accounts::decode_bet_accounts(candidates))
    }

    /// A single bet account by address.
    pub async fn fetch_bet(&self, bet_address: &Pubkey) -> Result<Option<DecodedBetAccount>> {
        match self.get_account_info(bet_address).await? {
            Some(data) => Ok(Some(accounts::decode_bet_account(
                &bet_address.to_string(),
                &data,
            )?)),
            None => Ok(None),
        }
    }

    /// The program configuration held in the authority PDA.
    pub async fn fetch_program_config(&self) -> Result<Option<ProgramConfig>> {
        let auth_pda = self.network.addresses().auth_pda;
        match self.get_account_info(&auth_pda).await? {
            Some(data) => Ok(Some(accounts::decode_program_config(&data)?)),
            None => Ok(None),
        }
    }

    /// Current operational status; `Unknown` when the config account is
    /// missing.
    pub async fn fetch_operational_status(&self) -> Result<OperationalStatus> {
        Ok(self
            .fetch_program_config()
            .await?
            .map(|config| config.operational_status)
            .unwrap_or_default())
    }
}
