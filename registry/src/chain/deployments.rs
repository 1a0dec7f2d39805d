//! Built-in Universal Router deployments.
//!
//! Adding a chain means adding one entry here (and a name in the
//! [`ChainId`] catalog if it should be addressable by name).

use alloy_primitives::address;

use super::{ChainId, Deployment};

/// Every chain with a known Universal Router deployment.
pub const BUILTIN: &[(ChainId, Deployment)] = &[
    (
        ChainId::MAINNET,
        Deployment::new(
            address!("0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"),
            address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            17_143_817,
        ),
    ),
    (
        ChainId::GOERLI,
        Deployment::new(
            address!("0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"),
            address!("0xb4fbf271143f4fbf7b91a5ded31805e42b2208d6"),
            8_940_568,
        ),
    ),
    (
        ChainId::SEPOLIA,
        Deployment::new(
            address!("0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"),
            address!("0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14"),
            3_543_575,
        ),
    ),
    (
        ChainId::POLYGON,
        Deployment::new(
            address!("0x643770E279d5D0733F21d6DC03A8efbABf3255B4"),
            address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"),
            46_866_777,
        ),
    ),
    (
        ChainId::POLYGON_MUMBAI,
        Deployment::new(
            address!("0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"),
            address!("0x9c3C9283D3e44854697Cd22D3Faa240Cfb032889"),
            35_176_052,
        ),
    ),
    (
        ChainId::OPTIMISM,
        Deployment::new(
            address!("0xeC8B0F7Ffe3ae75d7FfAb09429e3675bb63503e4"),
            address!("0x4200000000000000000000000000000000000006"),
            108_825_869,
        ),
    ),
    (
        ChainId::OPTIMISM_GOERLI,
        Deployment::new(
            address!("0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"),
            address!("0x4200000000000000000000000000000000000006"),
            8_887_728,
        ),
    ),
    (
        ChainId::ARBITRUM_ONE,
        Deployment::new(
            address!("0xeC8B0F7Ffe3ae75d7FfAb09429e3675bb63503e4"),
            address!("0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
            125_861_718,
        ),
    ),
    (
        ChainId::ARBITRUM_GOERLI,
        Deployment::new(
            address!("0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"),
            address!("0xe39Ab88f8A4777030A534146A9Ca3B52bd5D43A3"),
            18_815_277,
        ),
    ),
    (
        ChainId::CELO,
        Deployment::without_weth(
            address!("0x88a3ED7F21A3fCF6adb86b6F878C5B7a02D20e9b"),
            21_116_361,
        ),
    ),
    (
        ChainId::CELO_ALFAJORES,
        Deployment::without_weth(
            address!("0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"),
            17_566_658,
        ),
    ),
    (
        ChainId::BNB,
        Deployment::new(
            address!("0xeC8B0F7Ffe3ae75d7FfAb09429e3675bb63503e4"),
            address!("0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
            31_254_967,
        ),
    ),
    (
        ChainId::AVALANCHE,
        Deployment::new(
            address!("0x82635AF6146972cD6601161c4472ffe97237D292"),
            address!("0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7"),
            34_491_144,
        ),
    ),
    (
        ChainId::BASE_GOERLI,
        Deployment::new(
            address!("0xd0872d928672ae2ff74bdb2f5130ac12229cafaf"),
            address!("0x4200000000000000000000000000000000000006"),
            6_915_289,
        ),
    ),
    (
        ChainId::BASE,
        Deployment::new(
            address!("0xeC8B0F7Ffe3ae75d7FfAb09429e3675bb63503e4"),
            address!("0x4200000000000000000000000000000000000006"),
            3_229_053,
        ),
    ),
    (
        ChainId::BIT_TORRENT_MAINNET,
        Deployment::new(
            address!("0xB27481AdC53077191b293f2BA1A589cc77802078"),
            address!("0x23181F21DEa5936e24163FFABa4Ea3B316B57f3C"),
            28_132_160,
        ),
    ),
    (
        ChainId::FANTOM,
        Deployment::new(
            address!("0xF491e7B69E4244ad4002BC14e878a34207E38c29"),
            address!("0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83"),
            4_242_185,
        ),
    ),
    (
        ChainId::EON,
        Deployment::new(
            address!("0xa7B257019fc65Be804fd5A2Aa2AFe64cBC9E7d37"),
            address!("0xF5cB8652a84329A2016A386206761f455bCEDab6"),
            513_162,
        ),
    ),
];

/// Look up a built-in deployment by chain ID.
#[must_use]
pub fn by_chain_id(chain_id: ChainId) -> Option<&'static Deployment> {
    BUILTIN
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, deployment)| deployment)
}
