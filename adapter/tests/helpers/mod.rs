//! Shared multi-test setup: a CW20, the mock spoke pool, and the adapter.

#![allow(dead_code)]

use cosmwasm_std::{coins, Addr, Binary, Coin, Uint128, Uint256};
use cw20::{AllowanceResponse, BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use relay_adapter::msg::{ExecuteMsg, InstantiateMsg};
use relay_adapter::{EvmAddress, FeePercentage, RelayPayload};

pub const NATIVE_DENOM: &str = "uluna";
pub const PREFIX: &str = "terra";

/// 1 native unit at 18 decimals
pub const ONE_NATIVE: u128 = 1_000_000_000_000_000_000;

/// Relay fee used by the reference scenarios (0.0123236%)
pub const REFERENCE_FEE: i128 = 123_236_000_000_000;

pub const RECIPIENT_RAW: [u8; 20] = [0x22; 20];

// ============================================================================
// Contracts
// ============================================================================

fn contract_adapter() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        relay_adapter::contract::execute,
        relay_adapter::contract::instantiate,
        relay_adapter::contract::query,
    );
    Box::new(contract)
}

fn contract_spoke_pool() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        mock_spoke_pool::contract::execute,
        mock_spoke_pool::contract::instantiate,
        mock_spoke_pool::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub owner: Addr,
    pub vault: Addr,
    pub adapter: Addr,
    pub spoke_pool: Addr,
    pub token: Addr,
}

pub fn setup() -> Suite {
    let mut app = App::default();

    let owner = Addr::unchecked("terra1owner");
    let vault = Addr::unchecked("terra1vault");
    let intruder = Addr::unchecked("terra1intruder");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &vault, coins(10 * ONE_NATIVE, NATIVE_DENOM))
            .unwrap();
        router
            .bank
            .init_balance(storage, &intruder, coins(10 * ONE_NATIVE, NATIVE_DENOM))
            .unwrap();
    });

    let cw20_code_id = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code_id,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Bridged USDC".to_string(),
                symbol: "USDC".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: vault.to_string(),
                    amount: Uint128::from(1_000_000_000_000u128),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "usdc",
            None,
        )
        .unwrap();

    let spoke_code_id = app.store_code(contract_spoke_pool());
    let spoke_pool = app
        .instantiate_contract(
            spoke_code_id,
            owner.clone(),
            &mock_spoke_pool::msg::InstantiateMsg {
                token: Some(token.to_string()),
            },
            &[],
            "spoke-pool",
            None,
        )
        .unwrap();

    let adapter_code_id = app.store_code(contract_adapter());
    let adapter = app
        .instantiate_contract(
            adapter_code_id,
            owner.clone(),
            &InstantiateMsg {
                vault: vault.to_string(),
                spoke_pool: spoke_pool.to_string(),
                native_denom: NATIVE_DENOM.to_string(),
                address_prefix: PREFIX.to_string(),
            },
            &[],
            "relay-adapter",
            Some(owner.to_string()),
        )
        .unwrap();

    Suite {
        app,
        owner,
        vault,
        adapter,
        spoke_pool,
        token,
    }
}

// ============================================================================
// Payloads
// ============================================================================

pub fn payload(relay_fee_pct: i128) -> RelayPayload {
    RelayPayload {
        depositor: EvmAddress([0x11; 20]),
        recipient: EvmAddress(RECIPIENT_RAW),
        input_token: EvmAddress([0x33; 20]),
        output_token: EvmAddress([0x44; 20]),
        destination_chain_id: Uint256::from(42161u64),
        exclusive_relayer: EvmAddress::ZERO,
        quote_timestamp: 1_700_000_000,
        fill_deadline: 1_700_021_600,
        exclusivity_deadline: 0,
        message: vec![],
        relay_fee_pct: FeePercentage::from_i128(relay_fee_pct),
        reserved: EvmAddress::ZERO,
    }
}

/// Local account residual balances are swept to
pub fn recipient() -> Addr {
    Addr::unchecked(EvmAddress(RECIPIENT_RAW).to_bech32(PREFIX).unwrap())
}

pub fn cf_receive_msg(asset: &str, amount: u128, payload: &RelayPayload) -> ExecuteMsg {
    ExecuteMsg::CfReceive {
        src_chain: 1,
        src_address: Binary::from(vec![0xab; 20]),
        message: Binary::from(payload.abi_encode()),
        asset: asset.to_string(),
        amount: Uint128::new(amount),
    }
}

// ============================================================================
// Actions & Queries
// ============================================================================

impl Suite {
    /// Vault moves CW20 tokens to the adapter, as it does before `CfReceive`
    pub fn vault_transfer_tokens(&mut self, amount: u128) {
        self.app
            .execute_contract(
                self.vault.clone(),
                self.token.clone(),
                &Cw20ExecuteMsg::Transfer {
                    recipient: self.adapter.to_string(),
                    amount: Uint128::new(amount),
                },
                &[],
            )
            .unwrap();
    }

    pub fn cf_receive(
        &mut self,
        sender: &Addr,
        msg: &ExecuteMsg,
        funds: &[Coin],
    ) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.adapter.clone(), msg, funds)
    }

    pub fn native_balance(&self, addr: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(addr, NATIVE_DENOM)
            .unwrap()
            .amount
            .u128()
    }

    pub fn token_balance(&self, addr: &Addr) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &Cw20QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    /// Allowance the adapter grants the spoke pool on the CW20
    pub fn spoke_pool_allowance(&self) -> u128 {
        let res: AllowanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &Cw20QueryMsg::Allowance {
                    owner: self.adapter.to_string(),
                    spender: self.spoke_pool.to_string(),
                },
            )
            .unwrap();
        res.allowance.u128()
    }

    pub fn last_deposit(&self) -> Option<mock_spoke_pool::msg::DepositRecord> {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.spoke_pool,
                &mock_spoke_pool::msg::QueryMsg::LastDeposit {},
            )
            .unwrap()
    }

    pub fn deposit_count(&self) -> u64 {
        let res: mock_spoke_pool::msg::DepositCountResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.spoke_pool,
                &mock_spoke_pool::msg::QueryMsg::DepositCount {},
            )
            .unwrap();
        res.count
    }

    pub fn observed_allowance(&self) -> Uint128 {
        let res: mock_spoke_pool::msg::ObservedAllowanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.spoke_pool,
                &mock_spoke_pool::msg::QueryMsg::ObservedAllowance {},
            )
            .unwrap();
        res.allowance
    }

    pub fn reject_deposits(&mut self, reject: bool) {
        self.app
            .execute_contract(
                self.owner.clone(),
                self.spoke_pool.clone(),
                &mock_spoke_pool::msg::ExecuteMsg::SetRejectDeposits { reject },
                &[],
            )
            .unwrap();
    }
}
