//! Solidity interfaces for the read-only ENS calls this workspace issues.

use alloy_sol_types::sol;

sol! {
    #[allow(missing_docs)]
    interface IEnsRegistry {
        function owner(bytes32 node) external view returns (address);
        function resolver(bytes32 node) external view returns (address);
    }
}

sol! {
    #[allow(missing_docs)]
    interface IBaseRegistrar {
        function ownerOf(uint256 id) external view returns (address);
        function nameExpires(uint256 id) external view returns (uint256);
    }
}

sol! {
    #[allow(missing_docs)]
    interface INameWrapper {
        function getData(uint256 id) external view returns (address owner, uint32 fuses, uint64 expiry);
    }
}

sol! {
    #[allow(missing_docs)]
    interface IUniversalResolver {
        error ResolverNotFound();
        error ResolverWildcardNotSupported();
        error ResolverNotContract();
        error ResolverError(bytes returnData);
        error ReverseAddressMismatch(bytes result);

        function resolve(bytes name, bytes data) external view returns (bytes, address);
        function reverse(bytes reverseName) external view returns (string, address, address, address);
    }
}

sol! {
    #[allow(missing_docs)]
    interface IPublicResolver {
        function addr(bytes32 node) external view returns (address);
        function text(bytes32 node, string key) external view returns (string);
        function isApprovedFor(address owner, bytes32 node, address delegate) external view returns (bool);
    }
}

/// Text record key of the avatar record.
pub const AVATAR_KEY: &str = "avatar";
